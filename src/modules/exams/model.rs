use edupro_models::MajorId;
use edupro_models::catalog::{MAJORS, Major, find_major, find_major_by_code};

/// The exams screen while it is on display: which major's programme is
/// selected. Starts on the first major each time the screen opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamsScreen {
    selected: MajorId,
}

impl Default for ExamsScreen {
    fn default() -> Self {
        Self {
            selected: MAJORS[0].id,
        }
    }
}

impl ExamsScreen {
    pub fn selected(&self) -> &'static Major {
        find_major(self.selected).unwrap_or(&MAJORS[0])
    }

    /// Select the major with `code`. Unknown codes leave the selection alone.
    pub fn select_code(&mut self, code: &str) -> Option<&'static Major> {
        let major = find_major_by_code(code)?;
        self.selected = major.id;
        Some(major)
    }
}
