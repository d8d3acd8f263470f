//! Static deck data loaded at process start.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::{PhotoCategory, PhotoSeed, ProfileSeed, SocialLink};

const OWNER: &str = "Sergei";
const PROFESSION: &str = "Software Engineer at Startup";

/// Birthdate of the profile owner: 1998-05-10 14:00 UTC.
pub fn birthdate() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(1998, 5, 10, 14, 0, 0)
        .single()
        .unwrap_or_default()
}

/// The swipe deck, ordered by the number in each filename.
pub fn photos() -> Vec<PhotoSeed> {
    let shot = |id, src, alt, category| PhotoSeed {
        id,
        src,
        alt,
        category,
        name: OWNER,
        profession: PROFESSION,
    };

    vec![
        shot(
            1,
            "/assets/images/profile-pool-1.JPG",
            "Sergei in a rooftop pool with city skyline in background",
            PhotoCategory::Casual,
        ),
        shot(
            2,
            "/assets/images/profile-beach-2.JPG",
            "Sergei at the beach with sunglasses smiling",
            PhotoCategory::Casual,
        ),
        shot(
            3,
            "/assets/images/profile-burning-man-3.JPG",
            "Sergei at Burning Man festival with pink scarf",
            PhotoCategory::Casual,
        ),
        shot(
            4,
            "/assets/images/profile-gondola-4.jpg",
            "Sergei in a gondola with city view in background",
            PhotoCategory::Casual,
        ),
        shot(
            5,
            "/assets/images/profile-suit-smile-5.jpg",
            "Sergei in a suit in a park",
            PhotoCategory::Professional,
        ),
        shot(
            6,
            "/assets/images/profile-russia-6.JPG",
            "Sergei in Moscow with Kremlin in background at sunset",
            PhotoCategory::Casual,
        ),
        shot(
            7,
            "/assets/images/profile-hot-tub-7.jpg",
            "Sergei in a hot tub at night with snowy mountains",
            PhotoCategory::Casual,
        ),
        shot(
            8,
            "/assets/images/profile-book-8.jpg",
            "Sergei reading a book in bed",
            PhotoCategory::Casual,
        ),
    ]
}

/// The profile shown in the bio panel.
pub fn profile() -> ProfileSeed {
    let link = |platform: &str, url: &str, icon: &str| SocialLink {
        platform: platform.to_string(),
        url: url.to_string(),
        icon: icon.to_string(),
    };

    ProfileSeed {
        id: 1,
        name: OWNER.to_string(),
        birthdate: birthdate(),
        profession: PROFESSION.to_string(),
        bio: "Hey there! I'm Sergei, a passionate software engineer and designer with a love \
              for creating beautiful digital experiences. When I'm not coding, you'll find me \
              hiking in the mountains, experimenting with photography, or trying out new coffee \
              shops around the city. I believe in building products that make a positive impact \
              and create meaningful connections."
            .to_string(),
        interests: [
            "Coding",
            "Photography",
            "Hiking",
            "UX Design",
            "Travel",
            "Coffee",
            "Music",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
        social_links: vec![
            link("Twitter", "https://twitter.com", "fab fa-twitter"),
            link("LinkedIn", "https://linkedin.com", "fab fa-linkedin-in"),
            link("GitHub", "https://github.com", "fab fa-github"),
            link("Email", "mailto:hello@sergei.love", "fas fa-envelope"),
        ],
    }
}
