//! Modal update logic

use crate::message::ModalMessage;
use crate::model::App;

/// Handle modal messages
pub fn update(app: &mut App, msg: ModalMessage) {
    if !app.modal.is_open() {
        return;
    }

    match msg {
        ModalMessage::Close => app.modal.close(),
    }
}
