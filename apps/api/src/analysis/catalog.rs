//! Static recommendation content: per-track course catalogs and bonus videos.

use crate::analysis::models::CareerTrack;

pub type CatalogEntry = (&'static str, &'static str);

const DATA_SCIENCE_COURSES: &[CatalogEntry] = &[
    (
        "Python for Data Science - Coursera",
        "https://www.coursera.org/courses?query=python%20for%20data%20science",
    ),
    (
        "AI for Everyone - Coursera",
        "https://www.coursera.org/learn/ai-for-everyone",
    ),
    (
        "Machine Learning Crash Course by Google [Free]",
        "https://developers.google.com/machine-learning/crash-course",
    ),
    (
        "Machine Learning A-Z by Udemy",
        "https://www.udemy.com/course/machinelearning/",
    ),
    (
        "Intro to Machine Learning with TensorFlow by Udacity",
        "https://www.udacity.com/course/intro-to-machine-learning-with-tensorflow-nanodegree--nd230",
    ),
    (
        "Deep Learning Specialization - Coursera",
        "https://www.coursera.org/specializations/deep-learning",
    ),
];

const SOFTWARE_DEVELOPMENT_COURSES: &[CatalogEntry] = &[
    (
        "Java Programming - Udemy",
        "https://www.udemy.com/course/java-programming/",
    ),
    (
        "Spring Framework for Beginners - Udemy",
        "https://www.udemy.com/course/spring-framework-for-beginners/",
    ),
    (
        "Java Programming and Software Engineering Fundamentals - Coursera",
        "https://www.coursera.org/specializations/java-programming",
    ),
    (
        "Object Oriented Programming in Java - Coursera",
        "https://www.coursera.org/specializations/object-oriented-programming",
    ),
    (
        "Software Design and Architecture - Coursera",
        "https://www.coursera.org/specializations/software-design-architecture",
    ),
];

const WEB_DEVELOPMENT_COURSES: &[CatalogEntry] = &[
    (
        "The Web Developer Bootcamp - Udemy",
        "https://www.udemy.com/course/the-web-developer-bootcamp/",
    ),
    (
        "React - Full Course - Codecademy",
        "https://www.codecademy.com/learn/react-101",
    ),
    (
        "Full Stack Web Developer - Udacity",
        "https://www.udacity.com/course/full-stack-web-developer-nanodegree--nd0044",
    ),
    (
        "Become a React Developer - Udacity",
        "https://www.udacity.com/course/react-nanodegree--nd019",
    ),
    (
        "Node.js API Masterclass - Udemy",
        "https://www.udemy.com/course/nodejs-api-masterclass/",
    ),
];

pub const RESUME_VIDEOS: &[&str] = &[
    "https://youtu.be/y8YH0Qbu5h4",
    "https://youtu.be/J-4Fv8nq1iA",
    "https://youtu.be/yp693O87GmM",
    "https://youtu.be/UeMmCex9uTU",
    "https://youtu.be/dQ7Q8ZdnuN0",
    "https://youtu.be/HQqqQx5BCFY",
    "https://youtu.be/CLUsplI4xMU",
    "https://youtu.be/pbczsLkv7Cc",
];

pub const INTERVIEW_VIDEOS: &[&str] = &[
    "https://youtu.be/Ji46s5BHdr0",
    "https://youtu.be/seVxXHi2YMs",
    "https://youtu.be/9FgfsLa_SmY",
    "https://youtu.be/2HQmjLu-6RQ",
    "https://youtu.be/DQd_AlIvHUw",
    "https://youtu.be/oVVdezJ0e7w",
    "https://youtu.be/JZK1MZwUyUU",
    "https://youtu.be/CyXLhHQS3KY",
];

/// Course catalog for a track. Unknown has none.
pub fn course_catalog(track: CareerTrack) -> &'static [CatalogEntry] {
    match track {
        CareerTrack::DataScience => DATA_SCIENCE_COURSES,
        CareerTrack::SoftwareDevelopment => SOFTWARE_DEVELOPMENT_COURSES,
        CareerTrack::WebDevelopment => WEB_DEVELOPMENT_COURSES,
        CareerTrack::Unknown => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unknown_has_empty_catalog() {
        assert!(course_catalog(CareerTrack::Unknown).is_empty());
    }

    #[test]
    fn test_catalog_names_are_unique_per_track() {
        for track in [
            CareerTrack::DataScience,
            CareerTrack::SoftwareDevelopment,
            CareerTrack::WebDevelopment,
        ] {
            let catalog = course_catalog(track);
            let names: HashSet<_> = catalog.iter().map(|(n, _)| *n).collect();
            assert_eq!(names.len(), catalog.len(), "duplicate course in {track}");
            assert!(catalog.iter().all(|(_, url)| url.starts_with("https://")));
        }
    }
}
