//! Static profile content.
//!
//! Everything the page displays lives here as compile-time data. The
//! records are plain structs of `&'static str` — there is no loading
//! step and nothing can fail at render time. Display order of the list
//! slices is source order.

/// Biographical facts shown across all three tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub institution: &'static str,
    pub email: &'static str,
    /// Shown on the home tab under "About".
    pub bio: &'static str,
    /// Shown on the research tab under "Research Agenda".
    pub research_statement: &'static str,
    /// Shown on the teaching tab under "Teaching Philosophy".
    pub teaching_philosophy: &'static str,
}

/// One entry in the "Selected Publications" list (research tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Publication {
    pub title: &'static str,
    pub venue: &'static str,
    pub year: &'static str,
}

/// One entry in the "Recent Presentations" list (home tab).
///
/// `location` is part of the record but the page renders only year,
/// title, and event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub title: &'static str,
    pub event: &'static str,
    pub location: &'static str,
    pub year: &'static str,
}

/// One entry in the "Courses" list (teaching tab).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    pub code: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub term: &'static str,
}

/// The complete content record the renderer draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileContent {
    pub profile: Profile,
    pub publications: &'static [Publication],
    pub presentations: &'static [Presentation],
    pub courses: &'static [Course],
}

/// Fixed display year shown in the footer.
pub const FOOTER_YEAR: &str = "2026";

/// The inline profile record.
pub const PROFILE: ProfileContent = ProfileContent {
    profile: Profile {
        name: "Baoyu (Brian) Dai",
        title: "Ph.D. Student in Philosophy",
        institution: "University of California, Davis",
        email: "dbydai@ucdavis.edu",
        bio: "I am a Ph.D. student in the Department of Philosophy at the \
              University of California, Davis. My research is situated at the \
              intersection of the Philosophy of Science, the Philosophy of \
              Mathematics, and Metaphysics. I am particularly interested in \
              the epistemic nature of intra-mathematical explanation and the \
              evolution of desire-satisfaction theories in moral psychology.",
        research_statement: "My research agenda currently investigates how \
              mathematical proofs provide explanatory power, specifically \
              arguing for an epistemic approach to intra-mathematical \
              explanations. I am also exploring the challenges facing \
              desire-satisfaction theories of well-being, specifically \
              focusing on the 'problem of remote desires' and 'prudential \
              neutrality'.",
        teaching_philosophy: "I aim to bridge the gap between formal logical \
              systems and intuitive philosophical reasoning. In my time as a \
              Teaching Assistant for courses ranging from Elementary Logic to \
              Minds, Brains, and Computers, I have focused on helping \
              students master symbolic tools.",
    },
    publications: &[
        Publication {
            title: "Rethinking the Reproductive Autonomy Rationale",
            venue: "Under Review",
            year: "2024",
        },
        Publication {
            title: "A New Attempt Against Hirsch's Deflationism",
            venue: "Dianoia, (IX), 32-41",
            year: "2022",
        },
    ],
    presentations: &[
        Presentation {
            title: "Understanding Mathematics: Explaining Proofs",
            event: "7th Meeting of the APMP",
            location: "Pavia, Italy",
            year: "2024",
        },
        Presentation {
            title: "How to Read Intra-Mathematical Explanations",
            event: "IV Unifesp Conference",
            location: "S\u{e3}o Paulo, Brazil",
            year: "2023",
        },
    ],
    courses: &[
        Course {
            code: "PHI 013",
            name: "Minds, Brains, and Computers",
            role: "Teaching Assistant",
            term: "UC Davis, 2024\u{2013}2025",
        },
        Course {
            code: "PHILOS 211",
            name: "Elementary Logic",
            role: "Teaching Assistant",
            term: "UW Milwaukee, 2022\u{2013}2024",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_are_in_reverse_chronological_order() {
        let years: Vec<i32> = PROFILE
            .publications
            .iter()
            .map(|p| p.year.parse().unwrap())
            .collect();
        assert!(years.windows(2).all(|w| w[0] >= w[1]));

        let years: Vec<i32> = PROFILE
            .presentations
            .iter()
            .map(|p| p.year.parse().unwrap())
            .collect();
        assert!(years.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_record_counts() {
        assert_eq!(PROFILE.publications.len(), 2);
        assert_eq!(PROFILE.presentations.len(), 2);
        assert_eq!(PROFILE.courses.len(), 2);
    }

    #[test]
    fn test_every_presentation_has_a_location() {
        assert!(
            PROFILE
                .presentations
                .iter()
                .all(|p| !p.location.is_empty())
        );
    }

    #[test]
    fn test_email_looks_like_an_address() {
        assert!(PROFILE.profile.email.contains('@'));
    }
}
