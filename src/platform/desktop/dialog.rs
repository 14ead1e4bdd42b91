use rfd::{AsyncFileDialog, MessageButtons, MessageDialog, MessageLevel};

use crate::domain::entities::upload::{RawFile, SelectedFile};

/// Picks one file and reads its bytes. `None` when the user cancels.
pub async fn pick_raw_file(title: &str, filter: &str, extensions: &[&str]) -> Option<RawFile> {
    let handle = AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter, extensions)
        .pick_file()
        .await?;
    let bytes = handle.read().await;
    Some(RawFile::new(handle.file_name(), bytes))
}

/// Picks one file without reading it.
pub async fn pick_selected_file(title: &str, filter: &str, extensions: &[&str]) -> Option<SelectedFile> {
    let handle = AsyncFileDialog::new()
        .set_title(title)
        .add_filter(filter, extensions)
        .pick_file()
        .await?;
    Some(SelectedFile {
        name: handle.file_name(),
    })
}

pub fn show_message(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
