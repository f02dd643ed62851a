use chrono::NaiveDate;

use super::record::{RunRecord, SessionType};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap_or_default()
}

struct Seed {
    id: &'static str,
    session_id: &'static str,
    session_type: SessionType,
    session_number: Option<u32>,
    date: (i32, u32, u32),
    start_time: &'static str,
    end_time: &'static str,
    distance_km: f32,
    duration_min: u32,
    average_pace: &'static str,
    best_pace: Option<&'static str>,
    heart_rate: Option<u32>,
    cadence: Option<u32>,
    calories: Option<u32>,
    elevation_m: Option<u32>,
    route_image: Option<&'static str>,
    custom_image: Option<&'static str>,
    title: &'static str,
    location: &'static str,
    comment: &'static str,
}

impl Seed {
    fn build(&self) -> RunRecord {
        RunRecord {
            id: self.id.to_string(),
            session_id: self.session_id.to_string(),
            session_type: self.session_type,
            session_number: self.session_number,
            date: d(self.date.0, self.date.1, self.date.2),
            start_time: self.start_time.to_string(),
            end_time: self.end_time.to_string(),
            distance_km: self.distance_km,
            duration_min: self.duration_min,
            average_pace: self.average_pace.to_string(),
            best_pace: self.best_pace.map(str::to_string),
            average_heart_rate: self.heart_rate,
            average_cadence: self.cadence,
            calories: self.calories,
            elevation_m: self.elevation_m,
            route_image: self.route_image.map(str::to_string),
            custom_image: self.custom_image.map(str::to_string),
            title: Some(self.title.to_string()),
            location: Some(self.location.to_string()),
            comment: Some(self.comment.to_string()),
        }
    }
}

const SEEDS: &[Seed] = &[
    // Dec 28 - two sessions in one day
    Seed {
        id: "1",
        session_id: "session-1",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 28),
        start_time: "06:30",
        end_time: "07:15",
        distance_km: 5.2,
        duration_min: 45,
        average_pace: "5'38\"",
        best_pace: Some("4'52\""),
        heart_rate: Some(142),
        cadence: Some(165),
        calories: Some(485),
        elevation_m: Some(25),
        route_image: Some("https://images.unsplash.com/photo-1586287011575-a23134f797f9?w=600&h=400&fit=crop"),
        custom_image: Some("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=400&fit=crop"),
        title: "Dawn run complete! 🏃‍♂️",
        location: "Riverside Park",
        comment: "Felt great today. Finished the 5k goal and set a new personal best.",
    },
    Seed {
        id: "1-2",
        session_id: "session-2",
        session_type: SessionType::Evening,
        session_number: None,
        date: (2024, 12, 28),
        start_time: "19:30",
        end_time: "20:00",
        distance_km: 3.2,
        duration_min: 30,
        average_pace: "6'15\"",
        best_pace: Some("5'45\""),
        heart_rate: Some(128),
        cadence: Some(152),
        calories: Some(285),
        elevation_m: Some(8),
        route_image: Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Evening recovery run",
        location: "Around the block",
        comment: "Already ran this morning but went out again for an easy one. Legs feel good.",
    },
    // Dec 27 - interval training day, three sessions
    Seed {
        id: "2-1",
        session_id: "session-3",
        session_type: SessionType::Interval,
        session_number: Some(1),
        date: (2024, 12, 27),
        start_time: "07:00",
        end_time: "07:20",
        distance_km: 2.4,
        duration_min: 20,
        average_pace: "5'10\"",
        best_pace: Some("4'35\""),
        heart_rate: Some(168),
        cadence: Some(180),
        calories: Some(220),
        elevation_m: Some(0),
        route_image: Some("https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Interval set 1",
        location: "Stadium track",
        comment: "6 x 400m interval training, first set.",
    },
    Seed {
        id: "2-2",
        session_id: "session-4",
        session_type: SessionType::Recovery,
        session_number: None,
        date: (2024, 12, 27),
        start_time: "07:30",
        end_time: "07:50",
        distance_km: 2.0,
        duration_min: 20,
        average_pace: "7'30\"",
        best_pace: Some("6'45\""),
        heart_rate: Some(110),
        cadence: Some(140),
        calories: Some(140),
        elevation_m: Some(0),
        route_image: Some("https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Cooldown jog",
        location: "Stadium track",
        comment: "Easy jog after the intervals.",
    },
    Seed {
        id: "2-3",
        session_id: "session-5",
        session_type: SessionType::Interval,
        session_number: Some(2),
        date: (2024, 12, 27),
        start_time: "18:00",
        end_time: "18:15",
        distance_km: 2.0,
        duration_min: 15,
        average_pace: "5'00\"",
        best_pace: Some("4'28\""),
        heart_rate: Some(172),
        cadence: Some(185),
        calories: Some(180),
        elevation_m: Some(0),
        route_image: Some("https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Interval set 2",
        location: "Stadium track",
        comment: "8 x 200m speed intervals.",
    },
    Seed {
        id: "3",
        session_id: "session-6",
        session_type: SessionType::Evening,
        session_number: None,
        date: (2024, 12, 26),
        start_time: "19:00",
        end_time: "19:40",
        distance_km: 4.1,
        duration_min: 40,
        average_pace: "6'12\"",
        best_pace: Some("5'28\""),
        heart_rate: Some(138),
        cadence: Some(158),
        calories: Some(380),
        elevation_m: Some(15),
        route_image: Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=600&h=400&fit=crop"),
        custom_image: Some("https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=600&h=400&fit=crop"),
        title: "Night run challenge",
        location: "Olympic Park",
        comment: "Rediscovered how much I enjoy running after dark.",
    },
    Seed {
        id: "4",
        session_id: "session-7",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 24),
        start_time: "07:00",
        end_time: "08:30",
        distance_km: 10.5,
        duration_min: 90,
        average_pace: "5'24\"",
        best_pace: Some("4'58\""),
        heart_rate: Some(155),
        cadence: Some(172),
        calories: Some(925),
        elevation_m: Some(180),
        route_image: Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Christmas Eve long run",
        location: "Hillside trail",
        comment: "Went for 10k on Christmas Eve. Hard but worth it.",
    },
    // Dec 23 - morning and evening sessions
    Seed {
        id: "5-1",
        session_id: "session-8",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 23),
        start_time: "06:00",
        end_time: "06:35",
        distance_km: 4.5,
        duration_min: 35,
        average_pace: "5'55\"",
        best_pace: Some("5'20\""),
        heart_rate: Some(145),
        cadence: Some(160),
        calories: Some(395),
        elevation_m: Some(20),
        route_image: Some("https://images.unsplash.com/photo-1502904550040-7534597429ae?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Saturday morning run",
        location: "Island Park",
        comment: "Weekend mornings are the freshest.",
    },
    Seed {
        id: "5-2",
        session_id: "session-9",
        session_type: SessionType::Evening,
        session_number: None,
        date: (2024, 12, 23),
        start_time: "20:00",
        end_time: "20:45",
        distance_km: 6.2,
        duration_min: 45,
        average_pace: "6'05\"",
        best_pace: Some("5'30\""),
        heart_rate: Some(135),
        cadence: Some(158),
        calories: Some(545),
        elevation_m: Some(15),
        route_image: Some("https://images.unsplash.com/photo-1502904550040-7534597429ae?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Weekend evening run",
        location: "Riverside Park",
        comment: "The river at night is beautiful. Best skyline run so far!",
    },
    Seed {
        id: "6",
        session_id: "session-10",
        session_type: SessionType::Afternoon,
        session_number: None,
        date: (2024, 12, 22),
        start_time: "16:30",
        end_time: "17:00",
        distance_km: 3.2,
        duration_min: 30,
        average_pace: "6'45\"",
        best_pace: Some("5'55\""),
        heart_rate: Some(125),
        cadence: Some(152),
        calories: Some(285),
        elevation_m: Some(8),
        route_image: Some("https://images.unsplash.com/photo-1586287011575-a23134f797f9?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Short lunch-break run",
        location: "Around the block",
        comment: "Only had time for a short one, still refreshing.",
    },
    Seed {
        id: "7",
        session_id: "session-11",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 20),
        start_time: "06:45",
        end_time: "07:45",
        distance_km: 7.8,
        duration_min: 60,
        average_pace: "5'18\"",
        best_pace: Some("4'45\""),
        heart_rate: Some(148),
        cadence: Some(168),
        calories: Some(685),
        elevation_m: Some(32),
        route_image: Some("https://images.unsplash.com/photo-1578662996442-48f60103fc96?w=600&h=400&fit=crop"),
        custom_image: Some("https://images.unsplash.com/photo-1502904550040-7534597429ae?w=600&h=400&fit=crop"),
        title: "Weekend morning run 🌅",
        location: "Island Park",
        comment: "A relaxed weekend run. Great start to the day!",
    },
    Seed {
        id: "8",
        session_id: "session-12",
        session_type: SessionType::Evening,
        session_number: None,
        date: (2024, 12, 18),
        start_time: "18:30",
        end_time: "19:15",
        distance_km: 6.3,
        duration_min: 45,
        average_pace: "5'45\"",
        best_pace: Some("5'12\""),
        heart_rate: Some(140),
        cadence: Some(162),
        calories: Some(545),
        elevation_m: Some(22),
        route_image: Some("https://images.unsplash.com/photo-1540206351-d6465b3ac5c1?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "After-work run",
        location: "Sports complex",
        comment: "Running after a long day is the best stress relief.",
    },
    Seed {
        id: "9",
        session_id: "session-13",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 16),
        start_time: "07:30",
        end_time: "08:00",
        distance_km: 4.5,
        duration_min: 30,
        average_pace: "6'20\"",
        best_pace: Some("5'45\""),
        heart_rate: Some(132),
        cadence: Some(155),
        calories: Some(385),
        elevation_m: Some(18),
        route_image: Some("https://images.unsplash.com/photo-1476480862126-209bfaa8edc8?w=600&h=400&fit=crop"),
        custom_image: Some("https://images.unsplash.com/photo-1558618047-3c8c76ca7d13?w=600&h=400&fit=crop"),
        title: "Monday recharge",
        location: "Riverside Park",
        comment: "Kicking off the week with some energy!",
    },
    Seed {
        id: "10",
        session_id: "session-14",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 14),
        start_time: "09:00",
        end_time: "10:20",
        distance_km: 12.1,
        duration_min: 80,
        average_pace: "5'12\"",
        best_pace: Some("4'38\""),
        heart_rate: Some(162),
        cadence: Some(178),
        calories: Some(1125),
        elevation_m: Some(285),
        route_image: Some("https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Weekend distance challenge",
        location: "Mountain trail",
        comment: "New personal record for distance. Can't believe I finished 12k.",
    },
];

const IMPORT_SEEDS: &[Seed] = &[
    Seed {
        id: "imported-1",
        session_id: "imported-session-1",
        session_type: SessionType::Morning,
        session_number: None,
        date: (2024, 12, 25),
        start_time: "07:00",
        end_time: "07:45",
        distance_km: 6.2,
        duration_min: 45,
        average_pace: "5'22\"",
        best_pace: Some("4'58\""),
        heart_rate: Some(148),
        cadence: Some(172),
        calories: Some(545),
        elevation_m: Some(28),
        route_image: Some("https://images.unsplash.com/photo-1544723795-3fb6469f5b39?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Christmas morning run",
        location: "Riverside Park",
        comment: "Imported automatically from the health app.",
    },
    Seed {
        id: "imported-2",
        session_id: "imported-session-2",
        session_type: SessionType::Evening,
        session_number: None,
        date: (2024, 12, 21),
        start_time: "18:30",
        end_time: "19:20",
        distance_km: 8.5,
        duration_min: 50,
        average_pace: "5'52\"",
        best_pace: Some("5'12\""),
        heart_rate: Some(152),
        cadence: Some(165),
        calories: Some(720),
        elevation_m: Some(42),
        route_image: Some("https://images.unsplash.com/photo-1502904550040-7534597429ae?w=600&h=400&fit=crop"),
        custom_image: None,
        title: "Weekend long run",
        location: "Olympic Park",
        comment: "Imported automatically from the health app.",
    },
    Seed {
        id: "imported-3",
        session_id: "imported-session-3",
        session_type: SessionType::Night,
        session_number: None,
        date: (2024, 12, 19),
        start_time: "21:00",
        end_time: "21:30",
        distance_km: 4.0,
        duration_min: 30,
        average_pace: "7'30\"",
        best_pace: None,
        heart_rate: Some(118),
        cadence: Some(148),
        calories: Some(260),
        elevation_m: Some(5),
        route_image: None,
        custom_image: None,
        title: "Late night jog",
        location: "Around the block",
        comment: "Imported automatically from the health app.",
    },
];

/// Built-in demo records shown on first launch
pub fn sample_records() -> Vec<RunRecord> {
    SEEDS.iter().map(Seed::build).collect()
}

/// The canned batch the simulated health-app connect "fetches"
pub fn imported_records() -> Vec<RunRecord> {
    IMPORT_SEEDS.iter().map(Seed::build).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_ids_are_unique() {
        let records = sample_records();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn import_batch_does_not_collide_with_samples() {
        let records = sample_records();
        for imported in imported_records() {
            assert!(records.iter().all(|r| r.id != imported.id));
        }
    }
}
