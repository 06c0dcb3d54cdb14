// File: crates/bp-core/src/host.rs
// Summary: Caller-owned chart instances keyed by container, with per-container render serialization.
// Notes:
// - The host holds each container's last model and whatever zoom state the renderer reported.
//   The next render reads that zoom explicitly; nothing is looked up through ambient state.
// - A render is begin/finish so the feed fetch can sit in between. A container accepts one
//   in-flight render at a time. The container is busy exactly while its ticket is alive, so
//   cancelling or dropping the ticket (say, on a failed fetch) frees it and keeps the previous model.

use std::collections::BTreeMap;
use std::sync::{Arc, Weak};

use serde_json::Value;

use crate::chart::{build_chart, ChartModel, ChartOptions};
use crate::error::ChartError;
use crate::rows::Reading;
use crate::view::ZoomWindow;

#[derive(Debug, Default)]
pub struct ChartInstance {
    model: Option<ChartModel>,
    reported_zoom: Option<Value>,
    in_flight: Weak<()>,
}

impl ChartInstance {
    pub fn model(&self) -> Option<&ChartModel> {
        self.model.as_ref()
    }

    pub fn is_rendering(&self) -> bool {
        self.in_flight.strong_count() > 0
    }

    /// Zoom to carry into the next render. Renderer-reported state wins over the last
    /// model's window; an unreadable report counts as no prior zoom.
    pub fn previous_zoom(&self) -> Option<ZoomWindow> {
        match &self.reported_zoom {
            Some(state) => ZoomWindow::from_state(state),
            None => self.model.as_ref().map(|m| m.zoom),
        }
    }
}

/// Proof that a render was started for `container`. Consumed by finish or cancel.
#[derive(Debug)]
#[must_use = "a started render must be finished or cancelled"]
pub struct RenderTicket {
    container: String,
    token: Arc<()>,
}

impl RenderTicket {
    pub fn container(&self) -> &str {
        &self.container
    }
}

#[derive(Debug, Default)]
pub struct ChartHost {
    instances: BTreeMap<String, ChartInstance>,
}

impl ChartHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a container. Registering an existing one keeps its state.
    pub fn register(&mut self, container: impl Into<String>) {
        self.instances.entry(container.into()).or_default();
    }

    pub fn instance(&self, container: &str) -> Result<&ChartInstance, ChartError> {
        self.instances
            .get(container)
            .ok_or_else(|| ChartError::MissingTarget { container: container.to_string() })
    }

    fn instance_mut(&mut self, container: &str) -> Result<&mut ChartInstance, ChartError> {
        self.instances
            .get_mut(container)
            .ok_or_else(|| ChartError::MissingTarget { container: container.to_string() })
    }

    /// Store the renderer's current zoom state (any JSON shape) for the next render.
    pub fn report_zoom(&mut self, container: &str, state: Value) -> Result<(), ChartError> {
        self.instance_mut(container)?.reported_zoom = Some(state);
        Ok(())
    }

    pub fn begin_render(&mut self, container: &str) -> Result<RenderTicket, ChartError> {
        let inst = self.instance_mut(container)?;
        if inst.is_rendering() {
            return Err(ChartError::RenderInFlight { container: container.to_string() });
        }
        let token = Arc::new(());
        inst.in_flight = Arc::downgrade(&token);
        Ok(RenderTicket { container: container.to_string(), token })
    }

    /// Drop an in-flight render; the previous model stays in place.
    pub fn cancel(&mut self, ticket: RenderTicket) {
        drop(ticket);
    }

    /// Build the model for a started render. `opts.previous_zoom` overrides the stored zoom.
    pub fn finish_render(
        &mut self,
        ticket: RenderTicket,
        readings: &[Reading],
        opts: &ChartOptions,
    ) -> Result<&ChartModel, ChartError> {
        let RenderTicket { container, token } = ticket;
        let inst = self.instance_mut(&container)?;
        if !Weak::ptr_eq(&inst.in_flight, &Arc::downgrade(&token)) {
            return Err(ChartError::RenderInFlight { container });
        }
        drop(token);

        let mut opts = opts.clone();
        if opts.previous_zoom.is_none() {
            opts.previous_zoom = inst.previous_zoom();
        }
        let model = build_chart(readings, &opts)?;

        tracing::info!(
            container = %container,
            points = model.points.len(),
            me_only_fallback = model.me_only_fallback,
            "rendered chart"
        );
        inst.reported_zoom = None;
        Ok(inst.model.insert(model))
    }

    /// Begin and finish in one step, for feeds that are already in memory.
    pub fn render(
        &mut self,
        container: &str,
        readings: &[Reading],
        opts: &ChartOptions,
    ) -> Result<&ChartModel, ChartError> {
        let ticket = self.begin_render(container)?;
        self.finish_render(ticket, readings, opts)
    }
}
