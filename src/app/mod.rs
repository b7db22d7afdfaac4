// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Editor screen: owns the session, the crop view and the host services, and
// reacts to one message at a time.

mod handoff;
pub mod menu;
pub mod message;
pub mod model;
mod persistence;
mod resize;
pub mod runtime;
mod toast;
mod update;
pub mod view;
mod worker;

use tokio::sync::mpsc::UnboundedSender;

use crate::domain::intent::{EditRequest, LaunchError, LaunchIntent};
use crate::domain::session::EditSession;
use crate::host::Host;

pub use menu::MenuAction;
pub use message::{AppMessage, CropResult};
pub use model::{EditorModel, ResultCode};
pub use persistence::{save_bitmap, write_crop_result};
pub use resize::area_size;
pub use toast::Toast;
pub use view::crop::{CropWidget, RasterCropView};

/// Sending half of the editor's event loop.
pub type EventSender = UnboundedSender<AppMessage>;

pub struct Editor {
    pub model: EditorModel,
    view: Box<dyn CropWidget>,
    host: Host,
    events: EventSender,
}

impl Editor {
    /// Validate the intent and configure the crop view.
    ///
    /// On a rejected intent the user is told why and the view is never touched.
    pub fn launch(
        intent: &LaunchIntent,
        mut view: Box<dyn CropWidget>,
        host: Host,
        events: EventSender,
    ) -> Result<Self, LaunchError> {
        let request = match EditRequest::resolve(intent) {
            Ok(request) => request,
            Err(e) => {
                log::error!("Rejecting launch: {e}");
                host.toast(Toast::from(&e));
                return Err(e);
            }
        };

        log::info!(
            "Editing {} -> {} (crop intent: {})",
            request.source,
            request.destination,
            request.is_crop_intent
        );

        view.set_on_crop_image_complete_listener(events.clone());
        view.set_image_uri_async(&request.source);
        if request.fixed_square {
            view.set_fixed_aspect_ratio(true);
        }

        let mut model = EditorModel::new(EditSession::new(&request));
        model.loading = true;

        Ok(Self {
            model,
            view,
            host,
            events,
        })
    }

    pub fn is_finished(&self) -> bool {
        self.model.finished
    }

    pub fn is_busy(&self) -> bool {
        self.model.is_busy()
    }

    pub fn result(&self) -> ResultCode {
        self.model.result
    }

    fn toast(&self, toast: Toast) {
        self.host.toast(toast);
    }

    /// Start a crop extraction unless one is already running.
    fn request_crop(&mut self) {
        if self.model.cropping || self.model.saving {
            log::debug!("Crop already in progress, ignoring request");
            return;
        }
        self.model.cropping = true;
        self.view.get_cropped_image_async();
    }
}
