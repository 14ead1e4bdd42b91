/// The three slides of the main view. Navigation wraps in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Panel {
    #[default]
    Upload,
    Spreadsheet,
    SecondaryUpload,
}

impl Panel {
    pub const ALL: [Panel; 3] = [Panel::Upload, Panel::Spreadsheet, Panel::SecondaryUpload];

    pub fn index(self) -> usize {
        match self {
            Panel::Upload => 0,
            Panel::Spreadsheet => 1,
            Panel::SecondaryUpload => 2,
        }
    }

    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::from_index(self.index() + len - 1)
    }

    pub fn heading(self) -> &'static str {
        match self {
            Panel::Upload => "Upload Videos for DashCam",
            Panel::Spreadsheet => "Upload Excel for IoT Data",
            Panel::SecondaryUpload => "Upload Videos for CCTV",
        }
    }
}
