#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engagement {
    pub liked: bool,
    pub disliked: bool,
    pub subscribed: bool,
}

impl Engagement {
    pub fn toggle_like(&mut self) {
        self.liked = !self.liked;
        if self.liked {
            self.disliked = false;
        }
    }

    pub fn toggle_dislike(&mut self) {
        self.disliked = !self.disliked;
        if self.disliked {
            self.liked = false;
        }
    }

    pub fn toggle_subscribe(&mut self) {
        self.subscribed = !self.subscribed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_and_dislike_exclude_each_other() {
        let mut e = Engagement::default();
        e.toggle_like();
        assert!(e.liked);
        e.toggle_dislike();
        assert!(e.disliked && !e.liked);
        e.toggle_like();
        assert!(e.liked && !e.disliked);
        e.toggle_like();
        assert!(!e.liked && !e.disliked);
    }

    #[test]
    fn subscribe_is_independent() {
        let mut e = Engagement::default();
        e.toggle_like();
        e.toggle_subscribe();
        assert!(e.subscribed && e.liked);
        e.toggle_dislike();
        assert!(e.subscribed);
    }
}
