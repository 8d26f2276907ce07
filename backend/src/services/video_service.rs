use crate::models::{Video, VideoSummary};

struct Card {
    id: u32,
    title: &'static str,
    creator: &'static str,
    views: &'static str,
    duration: &'static str,
    thumbnail: &'static str,
    earnings: &'static str,
    creator_avatar: &'static str,
    upload_time: &'static str,
}

const GRID: [Card; 6] = [
    Card {
        id: 1,
        title: "Building DApps with Next.js and Web3",
        creator: "CryptoDevs",
        views: "45.2K",
        duration: "12:34",
        thumbnail: "/web3-development-tutorial.png",
        earnings: "125 $TUBE",
        creator_avatar: "/developer-avatar.png",
        upload_time: "2 hours ago",
    },
    Card {
        id: 2,
        title: "The Future of Decentralized Video Platforms",
        creator: "BlockchainExplorer",
        views: "23.8K",
        duration: "8:45",
        thumbnail: "/blockchain-future.png",
        earnings: "89 $TUBE",
        creator_avatar: "/blockchain-expert-avatar.png",
        upload_time: "5 hours ago",
    },
    Card {
        id: 3,
        title: "Smart Contract Security Best Practices",
        creator: "SecureCode",
        views: "67.1K",
        duration: "15:22",
        thumbnail: "/smart-contract-security-coding.png",
        earnings: "234 $TUBE",
        creator_avatar: "/security-expert-avatar.png",
        upload_time: "1 day ago",
    },
    Card {
        id: 4,
        title: "NFT Marketplace Deep Dive",
        creator: "NFTGuru",
        views: "34.5K",
        duration: "20:18",
        thumbnail: "/nft-marketplace-interface.png",
        earnings: "156 $TUBE",
        creator_avatar: "/nft-expert-avatar.png",
        upload_time: "3 days ago",
    },
    Card {
        id: 5,
        title: "DeFi Protocols Explained Simply",
        creator: "DeFiSimple",
        views: "89.3K",
        duration: "11:07",
        thumbnail: "/defi-protocols-explanation.png",
        earnings: "445 $TUBE",
        creator_avatar: "/defi-educator-avatar.png",
        upload_time: "1 week ago",
    },
    Card {
        id: 6,
        title: "Web3 Gaming Revolution",
        creator: "GameChain",
        views: "52.7K",
        duration: "18:33",
        thumbnail: "/web3-gaming-blockchain.png",
        earnings: "287 $TUBE",
        creator_avatar: "/gaming-developer-avatar.png",
        upload_time: "4 days ago",
    },
];

const RECOMMENDED: [u32; 3] = [2, 3, 4];

impl Card {
    fn summary(&self) -> VideoSummary {
        VideoSummary {
            id: self.id,
            title: self.title.to_string(),
            creator: self.creator.to_string(),
            views: self.views.to_string(),
            duration: self.duration.to_string(),
            thumbnail: self.thumbnail.to_string(),
            earnings: self.earnings.to_string(),
            creator_avatar: self.creator_avatar.to_string(),
            upload_time: self.upload_time.to_string(),
        }
    }
}

pub fn list_videos() -> Vec<VideoSummary> {
    GRID.iter().map(Card::summary).collect()
}

/// True for ids that appear in the catalog grid.
pub fn is_listed(id: u32) -> bool {
    GRID.iter().any(|card| card.id == id)
}

fn watch_records() -> Vec<Video> {
    vec![Video {
        id: 1,
        title: "Building DApps with Next.js and Web3".to_string(),
        creator: "CryptoDevs".to_string(),
        creator_address: "0x1234...5678".to_string(),
        creator_avatar: "/developer-avatar.png".to_string(),
        views: "45.2K".to_string(),
        likes: "2.1K".to_string(),
        duration: "12:34".to_string(),
        video_url: "/sample-video.mp4".to_string(),
        thumbnail: "/web3-development-tutorial.png".to_string(),
        earnings: "125 $TUBE".to_string(),
        upload_time: "2 hours ago".to_string(),
        description: "Learn how to build decentralized applications using Next.js and Web3 \
            technologies. This comprehensive tutorial covers smart contract integration, \
            wallet connectivity, and IPFS storage."
            .to_string(),
        category: "Education".to_string(),
        tags: vec!["web3", "nextjs", "blockchain", "tutorial"]
            .into_iter()
            .map(String::from)
            .collect(),
        nft_token_id: "1234".to_string(),
        ipfs_hash: "QmX1234567890abcdef".to_string(),
    }]
}

/// Resolves a watch-page id. Unknown or unparsable ids fall back to the
/// first record.
pub fn find_video(id: &str) -> Video {
    let mut records = watch_records();
    let position = id
        .trim()
        .parse::<u32>()
        .ok()
        .and_then(|id| records.iter().position(|video| video.id == id))
        .unwrap_or(0);
    records.swap_remove(position)
}

pub fn recommendations(current_video_id: u32) -> Vec<VideoSummary> {
    GRID.iter()
        .filter(|card| RECOMMENDED.contains(&card.id) && card.id != current_video_id)
        .map(Card::summary)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_six_videos_in_order() {
        let ids: Vec<u32> = list_videos().iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn known_id_resolves() {
        let video = find_video("1");
        assert_eq!(video.id, 1);
        assert_eq!(video.nft_token_id, "1234");
    }

    #[test]
    fn unknown_or_garbage_id_falls_back_to_first() {
        assert_eq!(find_video("42").id, 1);
        assert_eq!(find_video("abc").id, 1);
        assert_eq!(find_video("").id, 1);
    }

    #[test]
    fn only_grid_ids_are_listed() {
        assert!((1..=6).all(is_listed));
        assert!(!is_listed(0));
        assert!(!is_listed(7));
    }

    #[test]
    fn recommendations_exclude_current_video() {
        let ids: Vec<u32> = recommendations(3).iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(recommendations(1).len(), 3);
    }
}
