use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use rfd::MessageLevel;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::entities::grid::{DisplayGrid, GridSource};
use crate::domain::entities::panel::Panel;
use crate::domain::entities::upload::FileFormat;
use crate::platform::desktop::dialog::{pick_raw_file, pick_selected_file, show_message};
use crate::ui::state::app_state::{dispatch, Effect, Event, ViewState};
use crate::usecase::services::import_service::ImportService;

const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mov", "avi", "mkv", "webm", "m4v"];

const HEADER_CELL_STYLE: &str =
    "border: 1px solid #ccc; padding: 6px 10px; background: #f3f3f3; text-align: left;";
const BODY_CELL_STYLE: &str = "border: 1px solid #ddd; padding: 6px 10px;";

/// Runs one event through [`dispatch`] and carries out the effects.
fn send(mut view: Signal<ViewState>, event: Event) {
    let current = view.peek().clone();
    let (next, effects) = dispatch(current, event);
    view.set(next);
    for effect in effects {
        perform(view, effect);
    }
}

fn perform(view: Signal<ViewState>, effect: Effect) {
    match effect {
        Effect::Alert { title, message } => {
            info!(%title, %message, "advisory");
            show_message(MessageLevel::Info, &title, &message);
        }
        Effect::ReportError { title, message } => {
            warn!(%title, %message, "reporting failure");
            show_message(MessageLevel::Error, &title, &message);
        }
        Effect::HandOffVideo(file) => {
            // Analysis runs in an external service; nothing to wait for here.
            info!(file = %file.name, "video handed off for dashcam analysis");
        }
        Effect::StartCctvTimer(delay) => {
            spawn(async move {
                tokio::time::sleep(delay).await;
                send(view, Event::CctvProcessingFinished);
            });
        }
    }
}

#[component]
fn Heading(title: String) -> Element {
    rsx! {
        header {
            style: "position: fixed; top: 0; left: 0; width: 100%; background: #222; color: white; padding: 10px; text-align: center; font-size: 1.5em; z-index: 1000; box-shadow: 0px 2px 5px rgba(0, 0, 0, 0.3);",
            h1 { style: "margin: 0;", "{title}" }
        }
    }
}

#[component]
fn ExcelTable(grid: DisplayGrid, source: GridSource) -> Element {
    let caption = match source {
        GridSource::Uploaded => "",
        GridSource::Fallback => " (sample data)",
    };
    let shape = format!("{} rows × {} columns", grid.row_count(), grid.column_count());

    rsx! {
        div {
            style: "overflow: auto; max-height: 60vh; margin-top: 12px;",
            h3 { "{grid.title}{caption}" }
            p { style: "color: #777; margin: 4px 0;", "{shape}" }
            table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for (idx, header) in grid.headers.iter().enumerate() {
                            th { key: "{idx}", style: "{HEADER_CELL_STYLE}", "{header}" }
                        }
                    }
                }
                tbody {
                    for (row_idx, row) in grid.body.iter().enumerate() {
                        tr { key: "{row_idx}",
                            for (col_idx, cell) in row.iter().enumerate() {
                                td { key: "{col_idx}", style: "{BODY_CELL_STYLE}", "{cell}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ImageStrip(images: Vec<String>) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 10px; margin-top: 12px;",
            for (idx, url) in images.iter().enumerate() {
                img {
                    key: "{idx}",
                    src: "{url}",
                    alt: "Processed {idx}",
                    style: "width: 150px; height: 150px; object-fit: cover;",
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let import_service = use_hook(|| Arc::new(ImportService::new()));
    let view = use_signal(|| ViewState::new(&config));

    let state = view();
    let panel = state.panel;
    let loaded_label = match (&state.table_file, state.loaded_at) {
        (Some(name), Some(at)) => format!("{name} · {}", at.format("%H:%M:%S")),
        _ => String::new(),
    };
    let video_label = state
        .video
        .as_ref()
        .map(|file| file.name.clone())
        .unwrap_or_else(|| "No video selected".to_string());
    let cctv = state.cctv.clone();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 72px 16px 16px; min-height: 100vh;",
            Heading { title: config.title.clone() }

            div {
                style: "border: 1px solid #ddd; border-radius: 8px; padding: 16px;",

                if panel == Panel::Upload {
                    div {
                        h1 { "{panel.heading()}" }
                        div {
                            style: "display: flex; gap: 8px; align-items: center;",
                            button {
                                onclick: move |_| {
                                    spawn(async move {
                                        match pick_selected_file("Select dashcam video", "Video", &VIDEO_EXTENSIONS).await {
                                            Some(file) => send(view, Event::VideoSelected(file)),
                                            None => send(view, Event::FileSelectionCancelled),
                                        }
                                    });
                                },
                                "Choose video"
                            }
                            span { "{video_label}" }
                            button {
                                onclick: move |_| send(view, Event::VideoSubmitted),
                                "Upload"
                            }
                        }
                    }
                }

                if panel == Panel::Spreadsheet {
                    div {
                        h2 { "{panel.heading()}" }
                        button {
                            onclick: move |_| {
                                let import_service = import_service.clone();
                                spawn(async move {
                                    let Some(file) = pick_raw_file(
                                        "Select spreadsheet",
                                        "Spreadsheet",
                                        &FileFormat::SPREADSHEET_EXTENSIONS,
                                    )
                                    .await
                                    else {
                                        send(view, Event::FileSelectionCancelled);
                                        return;
                                    };
                                    let result = import_service.parse(&file);
                                    send(
                                        view,
                                        Event::SpreadsheetLoaded {
                                            file_name: file.name,
                                            result,
                                            at: Local::now(),
                                        },
                                    );
                                });
                            },
                            "Choose spreadsheet"
                        }
                        if !loaded_label.is_empty() {
                            span { style: "margin-left: 8px; color: #555;", "{loaded_label}" }
                        }
                        if let Some(rendered) = state.table.clone() {
                            ExcelTable { grid: rendered.grid, source: rendered.source }
                        }
                    }
                }

                if panel == Panel::SecondaryUpload {
                    div {
                        h1 { "{panel.heading()}" }
                        div {
                            style: "display: flex; gap: 8px; align-items: center;",
                            button {
                                disabled: cctv.processing,
                                onclick: move |_| {
                                    spawn(async move {
                                        match pick_selected_file("Select CCTV video", "Video", &VIDEO_EXTENSIONS).await {
                                            Some(file) => send(view, Event::CctvFileSelected(file)),
                                            None => send(view, Event::FileSelectionCancelled),
                                        }
                                    });
                                },
                                "Choose video"
                            }
                            button {
                                disabled: cctv.processing,
                                onclick: move |_| send(view, Event::CctvProcessRequested),
                                if cctv.processing { "Processing..." } else { "Process" }
                            }
                        }
                        if cctv.processing {
                            p { "Processing video..." }
                        }
                        if !cctv.images.is_empty() {
                            ImageStrip { images: cctv.images.clone() }
                        }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-top: 12px;",
                button { onclick: move |_| send(view, Event::PrevPanel), "❮" }
                span { style: "color: #555;", "{state.status}" }
                button { onclick: move |_| send(view, Event::NextPanel), "❯" }
            }
        }
    }
}
