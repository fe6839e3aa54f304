//! Sample articles loaded at startup so the site has content on first run.
//!
//! The set is fixed: every restart reseeds the same four published
//! articles with the same ids and dates.

use chrono::{DateTime, TimeZone, Utc};

use crate::models::Article;

struct Sample {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    category: &'static str,
    image_url: &'static str,
    date: (i32, u32, u32),
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: "1",
        title: "The Future of Remote Team Collaboration",
        content: r#"The landscape of work has fundamentally changed. What once required physical presence and face-to-face meetings has evolved into a sophisticated ecosystem of digital collaboration tools and remote-first methodologies.

## The Evolution of Remote Collaboration

Remote collaboration has moved beyond simple video calls and shared documents. Today's teams leverage advanced project management platforms, real-time collaborative editing tools, and sophisticated communication channels that enable seamless workflow integration.

## Key Technologies Driving Change

- Cloud-based project management systems
- Real-time collaborative documentation platforms
- Advanced video conferencing with screen sharing capabilities
- Integrated communication channels (Slack, Microsoft Teams)
- Virtual whiteboarding and brainstorming tools

These technologies have created new possibilities for distributed teams to maintain productivity levels that often exceed those of traditional office environments.

## Best Practices for Remote Team Success

Successful remote collaboration requires intentional strategy and clear communication protocols. Teams that thrive in remote environments establish regular check-ins, maintain transparent project tracking, and invest in quality collaboration tools."#,
        excerpt: "Explore how modern teams are leveraging technology to create seamless collaborative experiences across distributed workforces...",
        category: "Strategy",
        image_url: "https://images.unsplash.com/photo-1552664730-d307ca884978?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        date: (2024, 11, 15),
    },
    Sample {
        id: "2",
        title: "AI-Powered Business Intelligence Trends",
        content: r#"Artificial intelligence is revolutionizing how businesses analyze data and make strategic decisions. The integration of AI into business intelligence platforms is creating unprecedented opportunities for insights and automation.

## The Current State of AI in BI

Modern AI-powered BI tools can process vast amounts of data in real-time, identify patterns that humans might miss, and provide predictive analytics that help organizations stay ahead of market trends.

## Key Benefits

- Automated data analysis and pattern recognition
- Predictive modeling for future trends
- Natural language querying of complex datasets
- Real-time anomaly detection
- Personalized dashboards and insights

## Implementation Strategies

Organizations looking to implement AI-powered BI should start with clear objectives, ensure data quality, and invest in proper training for their teams."#,
        excerpt: "Discover how artificial intelligence is revolutionizing data analysis and decision-making processes in modern enterprises...",
        category: "Technology",
        image_url: "https://images.unsplash.com/photo-1497366216548-37526070297c?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        date: (2024, 11, 12),
    },
    Sample {
        id: "3",
        title: "Building High-Performance Teams",
        content: r#"Creating and maintaining teams that consistently deliver exceptional results requires a combination of strategic planning, effective communication, and continuous development.

## Core Principles

High-performance teams share several key characteristics: clear goals, defined roles, open communication, mutual trust, and a commitment to continuous improvement.

## Leadership Strategies

- Set clear expectations and objectives
- Foster a culture of psychological safety
- Provide regular feedback and recognition
- Invest in team development and training
- Encourage innovation and risk-taking

## Measuring Success

Track team performance through both quantitative metrics and qualitative assessments to ensure continuous improvement and alignment with organizational goals."#,
        excerpt: "Learn the essential strategies for creating and maintaining teams that consistently deliver exceptional results...",
        category: "Leadership",
        image_url: "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        date: (2024, 11, 10),
    },
    Sample {
        id: "4",
        title: "Digital Transformation Best Practices",
        content: r#"Digital transformation is more than just implementing new technology; it's about fundamentally changing how organizations operate and deliver value to customers.

## Understanding Digital Transformation

True digital transformation involves reimagining business processes, culture, and customer experiences to leverage the full potential of digital technologies.

## Key Success Factors

- Executive leadership and commitment
- Clear vision and strategy
- Employee engagement and training
- Customer-centric approach
- Iterative implementation

## Common Pitfalls to Avoid

Many organizations fail in their digital transformation efforts due to lack of clear strategy, resistance to change, or trying to do too much too quickly."#,
        excerpt: "A comprehensive guide to implementing successful digital transformation initiatives in enterprise environments...",
        category: "Innovation",
        image_url: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&h=600",
        date: (2024, 11, 8),
    },
];

fn midnight_utc((year, month, day): (i32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// The sample articles, in declaration order.
pub fn sample_articles() -> Vec<Article> {
    SAMPLES
        .iter()
        .map(|sample| {
            let date = midnight_utc(sample.date);
            Article {
                id: sample.id.to_string(),
                title: sample.title.to_string(),
                content: sample.content.to_string(),
                excerpt: sample.excerpt.to_string(),
                category: sample.category.to_string(),
                image_url: Some(sample.image_url.to_string()),
                published: true,
                created_at: date,
                updated_at: date,
            }
        })
        .collect()
}
