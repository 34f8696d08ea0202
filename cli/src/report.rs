use serde::Serialize;
use shamir_core::{Integrity, Reconstruction};

/// What the CLI prints for one share file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    file: String,
    /// Decimal, so arbitrarily large secrets survive JSON consumers.
    secret: String,
    flagged: Vec<usize>,
    flagged_shares: Vec<u64>,
    integrity: Integrity,
}

impl Report {
    pub fn new(file: impl Into<String>, reconstruction: &Reconstruction) -> Self {
        Self {
            file: file.into(),
            secret: reconstruction.secret().to_string(),
            flagged: reconstruction.flagged().to_vec(),
            flagged_shares: reconstruction.flagged_share_indices().to_vec(),
            integrity: reconstruction.integrity(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn integrity(&self) -> Integrity {
        self.integrity
    }

    pub fn render_text(&self) -> String {
        let mut out = format!("Secret ({}): {}\n", self.file, self.secret);
        if self.flagged.is_empty() {
            out.push_str(&format!("No wrong points found in {}.\n", self.file));
        } else {
            out.push_str(&format!(
                "Wrong points in {}: {:?}\n",
                self.file, self.flagged
            ));
        }
        out
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
