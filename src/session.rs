// session.rs - Attach/detach lifecycle
//
// Detached -> Running -> Detached. A session is one attach: it measures the
// container, sizes the surface, seeds a fresh field and then runs until
// detached. Re-attaching always means building a new session.

use log::{debug, trace};

use crate::config::FieldConfig;
use crate::error::{BackdropError, Result};
use crate::field::ParticleField;
use crate::surface::{Container, Size, Surface};

const TRACE_EVERY: u64 = 600;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Detached,
}

pub struct Session<C, S> {
    container: C,
    surface: S,
    field: ParticleField,
    phase: Phase,
    frames: u64,
}

impl<C: Container, S: Surface> Session<C, S> {
    /// Start a session. Without a drawing surface nothing is set up.
    pub fn attach(container: C, surface: Option<S>, config: FieldConfig, seed: u64) -> Result<Self> {
        let Some(mut surface) = surface else {
            return Err(BackdropError::ContextUnavailable);
        };

        let size = match container.measure() {
            Some(size) => {
                surface.set_size(size);
                size
            }
            None => {
                debug!("container not mounted, sizing deferred to next resize");
                Size::ZERO
            }
        };

        let field = ParticleField::new(size, config, seed);
        debug!("attached at {}x{} (seed {seed:#x})", size.width, size.height);

        Ok(Self { container, surface, field, phase: Phase::Running, frames: 0 })
    }

    /// Re-measure the container and resize surface and field to match.
    /// Returns the new size, or `None` when the container is not mounted.
    pub fn resize(&mut self) -> Result<Option<Size>> {
        if self.phase == Phase::Detached {
            return Err(BackdropError::Detached);
        }

        let Some(size) = self.container.measure() else {
            return Ok(None);
        };

        self.surface.set_size(size);
        self.field.resize(size);
        Ok(Some(size))
    }

    /// Run one frame. Returns false once detached, meaning nothing was drawn
    /// and no further frame should be scheduled.
    pub fn frame(&mut self) -> bool {
        if self.phase == Phase::Detached {
            return false;
        }

        self.field.tick(&mut self.surface);
        self.frames += 1;

        if self.frames % TRACE_EVERY == 0 {
            trace!("frame {}", self.frames);
        }
        true
    }

    pub fn detach(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Detached;
            debug!("detached after {} frames", self.frames);
        }
    }

    pub fn phase(&self) -> Phase { self.phase }
    pub fn is_running(&self) -> bool { self.phase == Phase::Running }
    pub fn frames(&self) -> u64 { self.frames }
    pub fn field(&self) -> &ParticleField { &self.field }
    pub fn surface(&self) -> &S { &self.surface }
    pub fn container(&self) -> &C { &self.container }
}
