use crate::models::Comment;
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentThread {
    pub comments: Vec<Comment>,
    pub draft: String,
    pub submitting: bool,
}

impl CommentThread {
    pub fn new(comments: Vec<Comment>) -> Self {
        CommentThread {
            comments,
            ..Default::default()
        }
    }

    /// Returns the trimmed draft to post, or `None` when there is nothing to
    /// send. A whitespace-only draft leaves the thread as it was.
    pub fn begin_submit(&mut self) -> Option<String> {
        let content = self.draft.trim();
        if content.is_empty() || self.submitting {
            return None;
        }
        let content = content.to_string();
        self.submitting = true;
        Some(content)
    }

    pub fn finish_submit(&mut self, posted: Option<Comment>) {
        self.submitting = false;
        if let Some(comment) = posted {
            self.comments.insert(0, comment);
            self.draft.clear();
        }
    }

    pub fn replace(&mut self, updated: Comment) {
        if let Some(slot) = self.comments.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated;
        }
    }
}

pub enum CommentAction {
    Loaded(Vec<Comment>),
    Draft(String),
    Submit,
    Posted(Option<Comment>),
    Liked(Comment),
}

impl Reducible for CommentThread {
    type Action = CommentAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CommentAction::Loaded(comments) => {
                next.comments = comments;
                next.submitting = false;
            }
            CommentAction::Draft(draft) => next.draft = draft,
            CommentAction::Submit => {
                if next.begin_submit().is_none() {
                    return self;
                }
            }
            CommentAction::Posted(posted) => next.finish_submit(posted),
            CommentAction::Liked(updated) => next.replace(updated),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment(id: u32, content: &str) -> Comment {
        Comment {
            id,
            author: "Web3Developer".to_string(),
            author_address: "0xabcd...1234".to_string(),
            author_avatar: "/developer-avatar.png".to_string(),
            content: content.to_string(),
            timestamp: "2 hours ago".to_string(),
            likes: 0,
            dislikes: 0,
            is_verified: true,
            zk_proof_verified: true,
        }
    }

    #[test]
    fn whitespace_draft_is_a_no_op() {
        let mut thread = CommentThread::new(vec![comment(1, "hi")]);
        thread.draft = " \t\n ".to_string();
        let before = thread.clone();
        assert!(thread.begin_submit().is_none());
        assert_eq!(thread, before);
    }

    #[test]
    fn posted_comment_goes_first_and_clears_draft() {
        let mut thread = CommentThread::new(vec![comment(1, "hi")]);
        thread.draft = "  great video ".to_string();
        assert_eq!(thread.begin_submit().as_deref(), Some("great video"));
        assert!(thread.submitting);
        assert!(thread.begin_submit().is_none());

        thread.finish_submit(Some(comment(2, "great video")));
        assert_eq!(thread.comments.len(), 2);
        assert_eq!(thread.comments[0].id, 2);
        assert!(thread.draft.is_empty());
    }

    #[test]
    fn failed_post_keeps_draft() {
        let mut thread = CommentThread::new(vec![]);
        thread.draft = "retry me".to_string();
        thread.begin_submit();
        thread.finish_submit(None);
        assert_eq!(thread.draft, "retry me");
        assert!(thread.comments.is_empty());
    }

    #[test]
    fn like_landing_during_a_post_is_kept() {
        let thread = Rc::new(CommentThread::new(vec![comment(1, "a")]));
        let thread = thread.reduce(CommentAction::Draft("second".to_string()));
        let thread = thread.reduce(CommentAction::Submit);
        assert!(thread.submitting);

        let mut liked = comment(1, "a");
        liked.likes = 3;
        let thread = thread.reduce(CommentAction::Liked(liked));
        let thread = thread.reduce(CommentAction::Posted(Some(comment(2, "second"))));

        assert_eq!(thread.comments.len(), 2);
        assert_eq!(thread.comments[0].id, 2);
        assert_eq!(thread.comments[1].likes, 3);
        assert!(!thread.submitting);
        assert!(thread.draft.is_empty());
    }

    #[test]
    fn typing_during_a_post_is_not_lost_on_failure() {
        let thread = Rc::new(CommentThread::new(vec![]));
        let thread = thread.reduce(CommentAction::Draft("first".to_string()));
        let thread = thread.reduce(CommentAction::Submit);
        let thread = thread.reduce(CommentAction::Draft("first, edited".to_string()));
        let thread = thread.reduce(CommentAction::Posted(None));
        assert_eq!(thread.draft, "first, edited");
        assert!(!thread.submitting);
    }

    #[test]
    fn liked_comment_is_replaced_in_place() {
        let mut thread = CommentThread::new(vec![comment(2, "b"), comment(1, "a")]);
        let mut liked = comment(1, "a");
        liked.likes = 5;
        thread.replace(liked);
        assert_eq!(thread.comments[1].likes, 5);
        assert_eq!(thread.comments[0].likes, 0);
    }
}
