pub mod campaigns;
pub mod comments;
pub mod donation;
pub mod engagement;
pub mod playback;
pub mod upload_form;
