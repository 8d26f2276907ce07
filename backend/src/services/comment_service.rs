use crate::models::Comment;
use crate::services::latency::Latency;
use crate::services::video_service::is_listed;
use log::info;
use std::collections::HashMap;
use tokio::sync::RwLock;

const ZK_PROOF_DELAY_MS: u64 = 2000;

fn seed_comments() -> Vec<Comment> {
    vec![
        Comment {
            id: 1,
            author: "Web3Developer".to_string(),
            author_address: "0xabcd...1234".to_string(),
            author_avatar: "/developer-avatar.png".to_string(),
            content: "Great tutorial! The explanation of smart contract integration was really \
                clear. Thanks for sharing this knowledge with the community."
                .to_string(),
            timestamp: "2 hours ago".to_string(),
            likes: 12,
            dislikes: 0,
            is_verified: true,
            zk_proof_verified: true,
        },
        Comment {
            id: 2,
            author: "BlockchainNewbie".to_string(),
            author_address: "0xefgh...5678".to_string(),
            author_avatar: "/blockchain-expert-avatar.png".to_string(),
            content: "This is exactly what I needed to understand Web3 development. The \
                step-by-step approach makes it easy to follow along."
                .to_string(),
            timestamp: "4 hours ago".to_string(),
            likes: 8,
            dislikes: 1,
            is_verified: false,
            zk_proof_verified: true,
        },
    ]
}

/// Comment threads for catalog videos. A thread is only stored once it is
/// written to; until then readers get the seed.
pub struct CommentStore {
    threads: RwLock<HashMap<u32, Vec<Comment>>>,
    latency: Latency,
}

impl CommentStore {
    pub fn new(latency: Latency) -> Self {
        CommentStore {
            threads: RwLock::new(HashMap::new()),
            latency,
        }
    }

    /// `None` for videos outside the catalog.
    pub async fn list(&self, video_id: u32) -> Option<Vec<Comment>> {
        if !is_listed(video_id) {
            return None;
        }
        let threads = self.threads.read().await;
        Some(threads.get(&video_id).cloned().unwrap_or_else(seed_comments))
    }

    #[cfg(test)]
    pub async fn stored_threads(&self) -> usize {
        self.threads.read().await.len()
    }

    /// Posts a comment after the simulated proof-of-watch check. Blank
    /// content and videos outside the catalog return `None` without touching
    /// any thread.
    pub async fn submit(&self, video_id: u32, content: &str) -> Option<Comment> {
        let content = content.trim();
        if content.is_empty() || !is_listed(video_id) {
            return None;
        }

        info!("Verifying zkProof for comment on video {video_id}...");
        self.latency.wait(ZK_PROOF_DELAY_MS).await;

        let mut threads = self.threads.write().await;
        let thread = threads.entry(video_id).or_insert_with(seed_comments);
        let comment = Comment {
            id: thread.len() as u32 + 1,
            author: "CurrentUser".to_string(),
            author_address: "0x1234...5678".to_string(),
            author_avatar: "/placeholder.svg".to_string(),
            content: content.to_string(),
            timestamp: "Just now".to_string(),
            likes: 0,
            dislikes: 0,
            is_verified: true,
            zk_proof_verified: true,
        };
        thread.insert(0, comment.clone());
        info!("Comment {} posted on video {video_id}", comment.id);
        Some(comment)
    }

    pub async fn like(&self, video_id: u32, comment_id: u32) -> Option<Comment> {
        if !is_listed(video_id) {
            return None;
        }
        let mut threads = self.threads.write().await;
        let thread = threads.entry(video_id).or_insert_with(seed_comments);
        thread
            .iter_mut()
            .find(|comment| comment.id == comment_id)
            .map(|comment| {
                comment.likes += 1;
                comment.clone()
            })
    }
}
