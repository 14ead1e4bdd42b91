use std::time::Duration;

use chrono::{DateTime, Local};

use crate::config::AppConfig;
use crate::domain::entities::grid::Rendered;
use crate::domain::entities::panel::Panel;
use crate::domain::entities::table::ParseOutcome;
use crate::domain::entities::upload::SelectedFile;
use crate::usecase::ports::decoder::ImportError;
use crate::usecase::services::render_service::render;

pub const SELECT_FILE_FIRST: &str = "Please select a file first.";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CctvState {
    pub file: Option<SelectedFile>,
    pub processing: bool,
    pub images: Vec<String>,
}

/// Everything the main view shows. Replaced wholesale by [`dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub panel: Panel,
    /// `None` until the first spreadsheet upload completes.
    pub table: Option<Rendered>,
    pub table_file: Option<String>,
    pub loaded_at: Option<DateTime<Local>>,
    pub status: String,
    pub video: Option<SelectedFile>,
    pub cctv: CctvState,
    cctv_delay: Duration,
    cctv_images: Vec<String>,
}

impl ViewState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            panel: Panel::default(),
            table: None,
            table_file: None,
            loaded_at: None,
            status: "Ready".to_string(),
            video: None,
            cctv: CctvState::default(),
            cctv_delay: config.cctv_delay,
            cctv_images: config.cctv_images.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    NextPanel,
    PrevPanel,
    FileSelectionCancelled,
    SpreadsheetLoaded {
        file_name: String,
        result: Result<ParseOutcome, ImportError>,
        at: DateTime<Local>,
    },
    VideoSelected(SelectedFile),
    VideoSubmitted,
    CctvFileSelected(SelectedFile),
    CctvProcessRequested,
    CctvProcessingFinished,
}

/// Side effects the shell performs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Alert { title: String, message: String },
    ReportError { title: String, message: String },
    HandOffVideo(SelectedFile),
    StartCctvTimer(Duration),
}

/// Pure transition: no IO, no clock reads.
pub fn dispatch(mut state: ViewState, event: Event) -> (ViewState, Vec<Effect>) {
    let mut effects = Vec::new();

    match event {
        Event::NextPanel => state.panel = state.panel.next(),
        Event::PrevPanel => state.panel = state.panel.prev(),
        Event::FileSelectionCancelled => {
            state.status = "File selection cancelled".to_string();
        }
        Event::SpreadsheetLoaded {
            file_name,
            result,
            at,
        } => {
            // Last completed load wins; failures keep whatever is on screen.
            match result.map_err(|err| err.to_string()).and_then(|outcome| {
                render(&outcome).map_err(|err| err.to_string())
            }) {
                Ok(rendered) => {
                    state.status = match &rendered.advisory {
                        Some(_) => format!("{file_name} has no data rows, showing sample data"),
                        None => format!("Loaded {} rows from {file_name}", rendered.grid.row_count()),
                    };
                    if let Some(advisory) = &rendered.advisory {
                        effects.push(Effect::Alert {
                            title: advisory.title.clone(),
                            message: advisory.message.clone(),
                        });
                    }
                    state.table = Some(rendered);
                    state.table_file = Some(file_name);
                    state.loaded_at = Some(at);
                }
                Err(message) => {
                    state.status = format!("Failed to load {file_name}: {message}");
                    effects.push(Effect::ReportError {
                        title: "Upload failed".to_string(),
                        message,
                    });
                }
            }
        }
        Event::VideoSelected(file) => {
            state.status = format!("Selected {}", file.name);
            state.video = Some(file);
        }
        Event::VideoSubmitted => match &state.video {
            Some(file) => {
                state.status = format!("Uploading {}", file.name);
                effects.push(Effect::HandOffVideo(file.clone()));
            }
            None => effects.push(Effect::Alert {
                title: state.panel.heading().to_string(),
                message: SELECT_FILE_FIRST.to_string(),
            }),
        },
        Event::CctvFileSelected(file) => {
            if !state.cctv.processing {
                state.cctv.file = Some(file);
                start_cctv(&mut state, &mut effects);
            }
        }
        Event::CctvProcessRequested => {
            if !state.cctv.processing && state.cctv.file.is_some() {
                start_cctv(&mut state, &mut effects);
            }
        }
        Event::CctvProcessingFinished => {
            state.cctv.processing = false;
            state.cctv.images = state.cctv_images.clone();
        }
    }

    (state, effects)
}

fn start_cctv(state: &mut ViewState, effects: &mut Vec<Effect>) {
    state.cctv.processing = true;
    effects.push(Effect::StartCctvTimer(state.cctv_delay));
}
