use crate::models::{PinnedFile, UploadProgress, UploadRequest, UploadStage};

pub const CATEGORIES: [&str; 6] = [
    "Education",
    "Technology",
    "Gaming",
    "Music",
    "Entertainment",
    "DeFi",
];

/// What the browser told us about a picked file.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRejection {
    InvalidFileType,
    MissingFile,
    MissingTitle,
    NotPinned,
    Busy,
}

impl FormRejection {
    pub fn message(&self) -> &'static str {
        match self {
            FormRejection::InvalidFileType => "Please select a valid video file",
            FormRejection::MissingFile => "Please select a video file",
            FormRejection::MissingTitle => "Please enter a video title",
            FormRejection::NotPinned => "Your video is still being pinned, please wait",
            FormRejection::Busy => "An upload is already in progress",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm {
    pub file: Option<SelectedFile>,
    pub pinned: Option<PinnedFile>,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: String,
    pub thumbnail_hash: Option<String>,
    pub monetization: bool,
    pub nft_price: String,
    pub progress: UploadProgress,
}

impl Default for UploadForm {
    fn default() -> Self {
        UploadForm {
            file: None,
            pinned: None,
            title: String::new(),
            description: String::new(),
            category: String::new(),
            tags: String::new(),
            thumbnail_hash: None,
            monetization: true,
            nft_price: "0.1".to_string(),
            progress: UploadProgress::default(),
        }
    }
}

fn stage_rank(stage: UploadStage) -> u8 {
    match stage {
        UploadStage::Idle => 0,
        UploadStage::Uploading => 1,
        UploadStage::Processing => 2,
        UploadStage::Minting => 3,
        UploadStage::Complete => 4,
        UploadStage::Error => 5,
    }
}

fn stem(file_name: &str) -> &str {
    file_name
        .rsplit_once('.')
        .map(|(stem, _)| stem)
        .unwrap_or(file_name)
}

/// Same rule the backend enforces: stay, step forward once, or fail.
pub fn can_move(from: UploadStage, to: UploadStage) -> bool {
    if matches!(from, UploadStage::Complete | UploadStage::Error) {
        return false;
    }
    to == from || to == UploadStage::Error || stage_rank(to) == stage_rank(from) + 1
}

/// `can_move`, plus the percentage may not drop within a stage.
pub fn can_advance(from: &UploadProgress, to: &UploadProgress) -> bool {
    can_move(from.stage, to.stage) && !(to.stage == from.stage && to.progress < from.progress)
}

impl UploadForm {
    /// Non-video picks are refused and leave the current selection alone.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), FormRejection> {
        if !file.content_type.starts_with("video/") {
            return Err(FormRejection::InvalidFileType);
        }
        self.file = Some(file);
        self.pinned = None;
        self.progress = UploadProgress::default();
        Ok(())
    }

    /// Stores the pin result if it still belongs to the selected file. The
    /// backend may rewrite the extension, so only stems are compared.
    pub fn attach_pin(&mut self, pinned: PinnedFile) -> bool {
        let belongs = self
            .file
            .as_ref()
            .is_some_and(|file| stem(&file.name) == stem(&pinned.file_name));
        if belongs {
            self.pinned = Some(pinned);
        }
        belongs
    }

    /// Builds the submit payload. Nothing is sent and no stage changes when
    /// this fails.
    pub fn validate(&self) -> Result<UploadRequest, FormRejection> {
        if self.file.is_none() {
            return Err(FormRejection::MissingFile);
        }
        if self.title.trim().is_empty() {
            return Err(FormRejection::MissingTitle);
        }
        let pinned = self.pinned.clone().ok_or(FormRejection::NotPinned)?;
        Ok(UploadRequest {
            title: self.title.trim().to_string(),
            description: self.description.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            thumbnail_hash: self.thumbnail_hash.clone(),
            monetization: self.monetization,
            nft_price: self.nft_price.clone(),
            file: Some(pinned),
        })
    }

    /// Validates and moves the form into `uploading` right away, so a second
    /// submit is refused before the backend reports anything.
    pub fn begin_submit(&mut self) -> Result<UploadRequest, FormRejection> {
        if self.progress.stage != UploadStage::Idle {
            return Err(FormRejection::Busy);
        }
        let request = self.validate()?;
        self.progress = UploadProgress {
            stage: UploadStage::Uploading,
            progress: 0,
            message: "Starting upload...".to_string(),
        };
        Ok(request)
    }

    /// Applies polled progress, ignoring anything that would go backwards.
    pub fn apply_progress(&mut self, progress: UploadProgress) -> bool {
        if can_advance(&self.progress, &progress) {
            self.progress = progress;
            true
        } else {
            false
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self.progress.stage,
            UploadStage::Uploading | UploadStage::Processing | UploadStage::Minting
        )
    }

    pub fn reset(&mut self) {
        *self = UploadForm::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video() -> SelectedFile {
        SelectedFile {
            name: "clip.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            size: 1024,
        }
    }

    fn pinned() -> PinnedFile {
        PinnedFile {
            cid: "QmCid".to_string(),
            gateway_url: "https://ipfs.io/ipfs/QmCid".to_string(),
            file_name: "clip.mp4".to_string(),
            content_type: "video/mp4".to_string(),
            size: 1024,
        }
    }

    fn checkpoint(stage: UploadStage, progress: u8) -> UploadProgress {
        UploadProgress {
            stage,
            progress,
            message: String::new(),
        }
    }

    #[test]
    fn disallowed_type_leaves_selection_unchanged() {
        let mut form = UploadForm::default();
        form.select_file(video()).unwrap();
        form.attach_pin(pinned());
        let before = form.clone();

        let rejected = form.select_file(SelectedFile {
            name: "cover.png".to_string(),
            content_type: "image/png".to_string(),
            size: 10,
        });
        assert_eq!(rejected, Err(FormRejection::InvalidFileType));
        assert_eq!(rejected.unwrap_err().message(), "Please select a valid video file");
        assert_eq!(form, before);
    }

    #[test]
    fn submit_requires_file_before_title() {
        let mut form = UploadForm::default();
        assert_eq!(form.validate(), Err(FormRejection::MissingFile));

        form.select_file(video()).unwrap();
        form.title = "   ".to_string();
        assert_eq!(form.validate(), Err(FormRejection::MissingTitle));
        assert_eq!(form.progress.stage, UploadStage::Idle);
    }

    #[test]
    fn submit_waits_for_pin() {
        let mut form = UploadForm::default();
        form.select_file(video()).unwrap();
        form.title = "My video".to_string();
        assert_eq!(form.validate(), Err(FormRejection::NotPinned));

        assert!(form.attach_pin(pinned()));
        let request = form.validate().unwrap();
        assert_eq!(request.file.unwrap().cid, "QmCid");
        assert!(request.monetization);
        assert_eq!(request.nft_price, "0.1");
    }

    #[test]
    fn stale_pin_is_ignored() {
        let mut form = UploadForm::default();
        form.select_file(video()).unwrap();
        let mut other = pinned();
        other.file_name = "another.webm".to_string();
        assert!(!form.attach_pin(other));
        assert!(form.pinned.is_none());
    }

    #[test]
    fn progress_never_skips_or_rewinds() {
        let mut form = UploadForm::default();
        assert!(form.apply_progress(checkpoint(UploadStage::Uploading, 10)));
        assert!(form.apply_progress(checkpoint(UploadStage::Uploading, 40)));
        assert!(!form.apply_progress(checkpoint(UploadStage::Minting, 85)));
        assert!(form.apply_progress(checkpoint(UploadStage::Processing, 70)));
        assert!(!form.apply_progress(checkpoint(UploadStage::Uploading, 10)));
        assert!(form.is_busy());
        assert!(form.apply_progress(checkpoint(UploadStage::Minting, 85)));
        assert!(form.apply_progress(checkpoint(UploadStage::Complete, 100)));
        assert!(!form.apply_progress(checkpoint(UploadStage::Error, 0)));
    }

    #[test]
    fn progress_never_drops_within_a_stage() {
        let mut form = UploadForm::default();
        assert!(form.apply_progress(checkpoint(UploadStage::Uploading, 40)));
        assert!(!form.apply_progress(checkpoint(UploadStage::Uploading, 10)));
        assert_eq!(form.progress.progress, 40);
        assert!(form.apply_progress(checkpoint(UploadStage::Uploading, 40)));
        assert!(form.apply_progress(checkpoint(UploadStage::Processing, 70)));
    }

    #[test]
    fn second_submit_is_refused_while_first_is_starting() {
        let mut form = UploadForm::default();
        form.select_file(video()).unwrap();
        form.title = "My video".to_string();
        form.attach_pin(pinned());

        let request = form.begin_submit().unwrap();
        assert_eq!(request.title, "My video");
        assert_eq!(form.progress.stage, UploadStage::Uploading);
        assert_eq!(form.progress.progress, 0);
        assert!(form.is_busy());
        assert_eq!(form.begin_submit(), Err(FormRejection::Busy));

        // Backend checkpoints continue from the local one.
        assert!(form.apply_progress(checkpoint(UploadStage::Uploading, 10)));
    }

    #[test]
    fn failed_validation_does_not_start() {
        let mut form = UploadForm::default();
        form.select_file(video()).unwrap();
        assert_eq!(form.begin_submit(), Err(FormRejection::MissingTitle));
        assert_eq!(form.progress.stage, UploadStage::Idle);
    }

    #[test]
    fn reset_returns_to_idle_defaults() {
        let mut form = UploadForm::default();
        form.select_file(video()).unwrap();
        form.title = "x".to_string();
        form.apply_progress(checkpoint(UploadStage::Uploading, 10));
        form.reset();
        assert_eq!(form, UploadForm::default());
    }
}
