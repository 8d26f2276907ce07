pub mod comment_section;
pub mod donation_modal;
pub mod layout;
pub mod video_card;
pub mod video_info;
pub mod video_player;
