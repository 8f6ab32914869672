//! Sample studio data used whenever storage holds nothing usable.

use crate::entities::{
    event::Event,
    photo::{Dimensions, Photo},
    user::{Role, User},
};

const UNSPLASH: &str = "https://images.unsplash.com/";

pub fn initial_users() -> Vec<User> {
    vec![
        User {
            id: "u-1".into(),
            email: "admin@Artworld Photography.com".into(),
            name: "Sarah Artworld Photography".into(),
            role: Role::Admin,
            assigned_event_ids: vec![],
        },
        User {
            id: "u-2".into(),
            email: "client@example.com".into(),
            name: "John Doe".into(),
            role: Role::User,
            assigned_event_ids: vec!["e-1".into(), "e-2".into()],
        },
    ]
}

pub fn initial_events() -> Vec<Event> {
    vec![
        Event {
            id: "e-1".into(),
            name: "Eternal Bliss Wedding".into(),
            date: "2024-05-15".into(),
            event_type: "Wedding".into(),
            cover_photo_id: Some("p-1".into()),
            assigned_user_ids: vec!["u-2".into()],
            is_locked: false,
            password: None,
            expiry_date: None,
        },
        Event {
            id: "e-2".into(),
            name: "TechCorp Summit 2024".into(),
            date: "2024-06-20".into(),
            event_type: "Corporate".into(),
            cover_photo_id: None,
            assigned_user_ids: vec!["u-2".into()],
            is_locked: true,
            password: Some("password123".into()),
            expiry_date: None,
        },
    ]
}

pub fn initial_photos() -> Vec<Photo> {
    const WEDDING: [(&str, &str, &str, u32); 6] = [
        ("p-1", "photo-1511795409834-ef04bbd61622", "The Grand Entrance", 800),
        ("p-2", "photo-1519741497674-611481863552", "Exchange of Rings", 1800),
        ("p-3", "photo-1465495910483-4c56a45a6c57", "First Dance", 800),
        ("p-4", "photo-1515934751635-c81c6bc9a2d8", "Bridal Portrait", 1600),
        ("p-5", "photo-1522673607200-1648832cee98", "The Bouquet", 800),
        ("p-6", "photo-1532712938310-34cb3982ef74", "Sunset Toast", 800),
    ];
    const SUMMIT: [(&str, &str, &str, u32); 4] = [
        ("p-7", "photo-1540575861501-7ad05823c93e", "Keynote Speaker", 800),
        ("p-8", "photo-1511578314322-379afb476865", "Networking Session", 800),
        ("p-9", "photo-1475721027785-f74eccf877e2", "Main Stage View", 800),
        ("p-10", "photo-1505373877841-8d25f7d46678", "Technical Panel", 800),
    ];

    let wedding = WEDDING
        .iter()
        .map(|&(id, image, title, height)| seed_photo(id, image, title, "e-1", "2024-05-16", height));
    let summit = SUMMIT
        .iter()
        .map(|&(id, image, title, height)| seed_photo(id, image, title, "e-2", "2024-06-21", height));

    wedding.chain(summit).collect()
}

fn seed_photo(id: &str, image: &str, title: &str, event_id: &str, uploaded: &str, height: u32) -> Photo {
    Photo {
        id: id.into(),
        url: format!("{UNSPLASH}{image}?auto=format&fit=crop&q=80&w=1200"),
        thumbnail_url: format!("{UNSPLASH}{image}?auto=format&fit=crop&q=80&w=400"),
        title: title.into(),
        description: None,
        event_id: event_id.into(),
        upload_date: uploaded.into(),
        tags: None,
        dimensions: Dimensions { width: 1200, height },
    }
}
