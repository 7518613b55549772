//! Course recommendation and bonus video selection.
//!
//! Every function takes its random source explicitly so concurrent runs never
//! share generator state.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::warn;

use crate::analysis::catalog::{course_catalog, INTERVIEW_VIDEOS, RESUME_VIDEOS};
use crate::analysis::models::{BonusVideos, CareerTrack, Course};

pub const MIN_COURSE_COUNT: u8 = 1;
pub const MAX_COURSE_COUNT: u8 = 10;
pub const DEFAULT_COURSE_COUNT: u8 = 4;

/// Clamps a requested course count into [1, 10]. Out-of-range values are
/// logged and pulled to the nearest bound, never rejected.
pub fn clamp_course_count(requested: i64) -> u8 {
    let clamped = requested.clamp(MIN_COURSE_COUNT as i64, MAX_COURSE_COUNT as i64) as u8;
    if clamped as i64 != requested {
        warn!("Course count {requested} out of range, clamped to {clamped}");
    }
    clamped
}

/// Shuffles the track's catalog and returns the first `count` courses.
pub fn recommend_courses<R: Rng + ?Sized>(
    track: CareerTrack,
    count: u8,
    rng: &mut R,
) -> Vec<Course> {
    let mut catalog = course_catalog(track).to_vec();
    catalog.shuffle(rng);
    catalog
        .into_iter()
        .take(count as usize)
        .map(|(name, url)| Course {
            name: name.to_string(),
            url: url.to_string(),
        })
        .collect()
}

pub fn pick_bonus_videos<R: Rng + ?Sized>(rng: &mut R) -> BonusVideos {
    BonusVideos {
        resume_video: RESUME_VIDEOS.choose(rng).map(|v| v.to_string()),
        interview_video: INTERVIEW_VIDEOS.choose(rng).map(|v| v.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_clamp_course_count() {
        assert_eq!(clamp_course_count(0), 1);
        assert_eq!(clamp_course_count(-5), 1);
        assert_eq!(clamp_course_count(4), 4);
        assert_eq!(clamp_course_count(10), 10);
        assert_eq!(clamp_course_count(99), 10);
    }

    #[test]
    fn test_length_is_min_of_count_and_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        for track in [
            CareerTrack::DataScience,
            CareerTrack::SoftwareDevelopment,
            CareerTrack::WebDevelopment,
        ] {
            let size = course_catalog(track).len();
            for count in MIN_COURSE_COUNT..=MAX_COURSE_COUNT {
                let courses = recommend_courses(track, count, &mut rng);
                assert_eq!(courses.len(), (count as usize).min(size));
            }
        }
    }

    #[test]
    fn test_courses_are_distinct_catalog_members() {
        let mut rng = StdRng::seed_from_u64(42);
        let catalog: HashSet<_> = course_catalog(CareerTrack::DataScience)
            .iter()
            .map(|(n, u)| (n.to_string(), u.to_string()))
            .collect();

        for _ in 0..20 {
            let courses = recommend_courses(CareerTrack::DataScience, 4, &mut rng);
            let picked: HashSet<_> = courses
                .iter()
                .map(|c| (c.name.clone(), c.url.clone()))
                .collect();
            assert_eq!(picked.len(), courses.len(), "duplicate course");
            assert!(picked.is_subset(&catalog));
        }
    }

    #[test]
    fn test_unknown_track_recommends_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(recommend_courses(CareerTrack::Unknown, 10, &mut rng).is_empty());
    }

    #[test]
    fn test_bonus_videos_come_from_lists() {
        let mut rng = StdRng::seed_from_u64(3);
        let videos = pick_bonus_videos(&mut rng);
        let resume = videos.resume_video.unwrap();
        let interview = videos.interview_video.unwrap();
        assert!(RESUME_VIDEOS.contains(&resume.as_str()));
        assert!(INTERVIEW_VIDEOS.contains(&interview.as_str()));
    }
}
