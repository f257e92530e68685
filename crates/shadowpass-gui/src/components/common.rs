use gtk4::prelude::*;
use shadowpass_core::Error;

/// Show a modal notice over `parent`.
pub fn show_notice(
    parent: &gtk4::ApplicationWindow,
    message_type: gtk4::MessageType,
    title: &str,
    body: &str,
) {
    let dialog = gtk4::MessageDialog::builder()
        .transient_for(parent)
        .modal(true)
        .message_type(message_type)
        .buttons(gtk4::ButtonsType::Ok)
        .text(title)
        .secondary_text(body)
        .build();
    dialog.connect_response(|dialog, _| dialog.destroy());
    dialog.present();
}

/// Present an action error as a warning or error notice.
pub fn show_error(parent: &gtk4::ApplicationWindow, error: &Error) {
    let message_type = if error.is_warning() {
        gtk4::MessageType::Warning
    } else {
        gtk4::MessageType::Error
    };
    tracing::warn!("{}: {}", error.title(), error);
    show_notice(parent, message_type, error.title(), &error.to_string());
}
