use crate::models::{
    AnalyticsOverview, AudienceSlice, EngagementPoint, MetricCard, TopVideo, ViewsPoint,
};

const MONTHLY_VIEWS: [(&str, u64, u64); 6] = [
    ("Jan", 12000, 240),
    ("Feb", 15000, 300),
    ("Mar", 18000, 360),
    ("Apr", 22000, 440),
    ("May", 28000, 560),
    ("Jun", 35000, 700),
];

const MONTHLY_ENGAGEMENT: [(&str, u64, u64, u64); 6] = [
    ("Jan", 800, 120, 45),
    ("Feb", 950, 150, 60),
    ("Mar", 1200, 180, 75),
    ("Apr", 1400, 220, 90),
    ("May", 1800, 280, 120),
    ("Jun", 2200, 350, 150),
];

const AUDIENCE: [(&str, u8, &str); 5] = [
    ("18-24", 35, "#ff0000"),
    ("25-34", 28, "#ff4444"),
    ("35-44", 20, "#ff6666"),
    ("45-54", 12, "#ff8888"),
    ("55+", 5, "#ffaaaa"),
];

fn views_series() -> Vec<ViewsPoint> {
    MONTHLY_VIEWS
        .iter()
        .map(|&(date, views, earnings)| ViewsPoint {
            date: date.to_string(),
            views,
            earnings,
        })
        .collect()
}

fn engagement_series() -> Vec<EngagementPoint> {
    MONTHLY_ENGAGEMENT
        .iter()
        .map(|&(date, likes, comments, shares)| EngagementPoint {
            date: date.to_string(),
            likes,
            comments,
            shares,
        })
        .collect()
}

fn audience() -> Vec<AudienceSlice> {
    AUDIENCE
        .iter()
        .map(|&(name, value, color)| AudienceSlice {
            name: name.to_string(),
            value,
            color: color.to_string(),
        })
        .collect()
}

fn top_videos() -> Vec<TopVideo> {
    vec![
        TopVideo {
            title: "Building DeFi Apps with Solidity".to_string(),
            views: 45000,
            earnings: 900,
            engagement: 92,
            thumbnail: "/smart-contract-security-coding.png".to_string(),
        },
        TopVideo {
            title: "Web3 Development Tutorial".to_string(),
            views: 38000,
            earnings: 760,
            engagement: 88,
            thumbnail: "/web3-development-tutorial.png".to_string(),
        },
        TopVideo {
            title: "The Future of Blockchain".to_string(),
            views: 32000,
            earnings: 640,
            engagement: 85,
            thumbnail: "/blockchain-future.png".to_string(),
        },
    ]
}

/// Groups digits in thousands, e.g. `130000` -> `130,000`.
fn with_separators(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn metric(label: &str, value: String, change: &str) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
        change: change.to_string(),
    }
}

pub fn overview() -> AnalyticsOverview {
    let views = views_series();
    let total_views: u64 = views.iter().map(|p| p.views).sum();
    let total_earnings: u64 = views.iter().map(|p| p.earnings).sum();

    AnalyticsOverview {
        metrics: vec![
            metric("Total Views", with_separators(total_views), "+12.5%"),
            metric(
                "Total Earnings",
                format!("{} $TUBE", with_separators(total_earnings)),
                "+18.2%",
            ),
            metric("Subscribers", with_separators(8450), "+8.1%"),
            metric("Avg. Watch Time", "4:32".to_string(), "+5.3%"),
        ],
        views,
        engagement: engagement_series(),
        audience: audience(),
        top_videos: top_videos(),
    }
}
