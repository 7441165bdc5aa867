//! Arena of bound surfaces.
//!
//! Each attached surface owns one [`PointerTracker`] whose handlers are the
//! surface's [`SwipeSurface`]. Surfaces are fully isolated from each other;
//! a detached surface's slot is reused by the next attach.

use swipekit_common::config::SwipeConfig;
use swipekit_common::error::{SwipeError, SwipeResult};
use swipekit_model::{PointerEvent, PointerTypes, SurfaceId, SwipeDirection};
use swipekit_pointer_tracker::{GestureEvent, PointerSource, PointerTracker};

use crate::scroll::ScrollQuery;
use crate::surface::{SwipeHandler, SwipeSignal, SwipeSurface};

/// Per-registration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BindingOptions {
    /// Recognize touch input only.
    pub disable_mouse: bool,
}

impl BindingOptions {
    pub fn touch_only() -> Self {
        Self {
            disable_mouse: true,
        }
    }

    pub fn pointer_types(self) -> PointerTypes {
        if self.disable_mouse {
            PointerTypes::TOUCH_ONLY
        } else {
            PointerTypes::ALL
        }
    }
}

/// Outcome of registering a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    Registered,
    /// Horizontal swipes are disabled in the configuration.
    Skipped,
}

/// Owns every bound surface and routes events to them.
#[derive(Debug)]
pub struct SwipeRegistry {
    config: SwipeConfig,
    slots: Vec<Option<PointerTracker<SwipeSurface>>>,
}

impl Default for SwipeRegistry {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeRegistry {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            slots: Vec::new(),
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Attach a surface backed by `scroll`. Listeners are subscribed as
    /// directions are registered.
    pub fn attach(&mut self, scroll: impl ScrollQuery + 'static) -> SurfaceId {
        let free = self.slots.iter().position(Option::is_none);
        let index = match free {
            Some(index) => index,
            None => {
                self.slots.push(None);
                self.slots.len() - 1
            }
        };
        let id = SurfaceId(index);

        let surface = SwipeSurface::new(id, Box::new(scroll));
        self.slots[index] = Some(PointerTracker::unbound(
            id,
            surface,
            self.config.tracker,
        ));
        tracing::info!(surface = %id, "Surface attached");
        id
    }

    /// Register `handler` for swipes in `direction` on `surface`.
    pub fn register(
        &mut self,
        source: &mut dyn PointerSource,
        surface: SurfaceId,
        direction: SwipeDirection,
        options: BindingOptions,
        handler: impl FnMut(&SwipeSignal) + 'static,
    ) -> SwipeResult<Registration> {
        if !direction.axis().is_vertical() && !self.config.horizontal_swipes {
            tracing::debug!(%surface, %direction, "Horizontal swipes disabled; not registering");
            return Ok(Registration::Skipped);
        }

        let thresholds = self.config.classifier.clone();
        let tracker = self.slot_mut(surface)?;
        let pointer_types = options.pointer_types();
        tracker.widen(source, pointer_types)?;
        tracker.handlers_mut().add_direction(
            direction,
            thresholds,
            pointer_types,
            Box::new(handler) as SwipeHandler,
        );

        tracing::info!(
            %surface,
            %direction,
            disable_mouse = options.disable_mouse,
            "Swipe direction registered"
        );
        Ok(Registration::Registered)
    }

    /// Register every direction the configuration allows, all reporting to
    /// one handler.
    pub fn register_all(
        &mut self,
        source: &mut dyn PointerSource,
        surface: SurfaceId,
        options: BindingOptions,
        handler: impl FnMut(&SwipeSignal) + Clone + 'static,
    ) -> SwipeResult<Vec<SwipeDirection>> {
        let mut registered = Vec::new();
        for direction in SwipeDirection::ALL {
            let outcome = self.register(source, surface, direction, options, handler.clone())?;
            if outcome == Registration::Registered {
                registered.push(direction);
            }
        }
        Ok(registered)
    }

    /// Process one event delivered to `surface`.
    pub fn dispatch(
        &mut self,
        surface: SurfaceId,
        event: PointerEvent,
    ) -> SwipeResult<GestureEvent> {
        Ok(self.slot_mut(surface)?.dispatch(event))
    }

    /// Drain `source`, dispatching every event it delivers. Events for
    /// surfaces that are no longer attached are dropped.
    pub fn pump(&mut self, source: &mut dyn PointerSource) -> SwipeResult<usize> {
        let mut dispatched = 0;
        while let Some((surface, event)) = source.poll()? {
            match self.dispatch(surface, event) {
                Ok(_) => dispatched += 1,
                Err(SwipeError::UnknownSurface { id }) => {
                    tracing::warn!(surface = id, "Dropping event for unknown surface");
                }
                Err(e) => return Err(e),
            }
        }
        Ok(dispatched)
    }

    /// Signals emitted on `surface` since the last call.
    pub fn take_signals(&mut self, surface: SurfaceId) -> SwipeResult<Vec<SwipeSignal>> {
        Ok(self.slot_mut(surface)?.handlers_mut().take_signals())
    }

    /// Unsubscribe all of `surface`'s listeners and free its slot.
    pub fn detach(
        &mut self,
        source: &mut dyn PointerSource,
        surface: SurfaceId,
    ) -> SwipeResult<()> {
        let tracker = self
            .slots
            .get_mut(surface.0)
            .and_then(Option::take)
            .ok_or_else(|| SwipeError::unknown_surface(surface.0))?;
        tracker.unbind(source);
        tracing::info!(%surface, "Surface detached");
        Ok(())
    }

    pub fn surface(&self, surface: SurfaceId) -> Option<&PointerTracker<SwipeSurface>> {
        self.slots.get(surface.0).and_then(Option::as_ref)
    }

    /// Ids of all attached surfaces.
    pub fn surfaces(&self) -> Vec<SurfaceId> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(index, _)| SurfaceId(index))
            .collect()
    }

    fn slot_mut(&mut self, surface: SurfaceId) -> SwipeResult<&mut PointerTracker<SwipeSurface>> {
        self.slots
            .get_mut(surface.0)
            .and_then(Option::as_mut)
            .ok_or_else(|| SwipeError::unknown_surface(surface.0))
    }
}
