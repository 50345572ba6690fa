//! Closed option sets backing the enumerated questionnaire fields.
//!
//! Every set carries a stable kebab-case identifier (used for `<option value>` and
//! serde) and an English display label.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Common surface of the closed option sets, used to build pickers generically.
pub trait Choice: Copy + PartialEq + 'static {
    fn all() -> &'static [Self];
    fn id(self) -> &'static str;
    fn label(self) -> &'static str;
}

macro_rules! option_set {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => ($id:literal, $label:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $id,)+
                }
            }

            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ();

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($id => Ok(Self::$variant),)+
                    _ => Err(()),
                }
            }
        }

        impl Choice for $name {
            fn all() -> &'static [Self] {
                Self::ALL
            }

            fn id(self) -> &'static str {
                self.as_str()
            }

            fn label(self) -> &'static str {
                $name::label(self)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

option_set! {
    /// Intended field of study.
    pub enum Major {
        ComputerScience => ("computer-science", "Computer Science"),
        Economics => ("economics", "Economics"),
        Psychology => ("psychology", "Psychology"),
        BusinessAdministration => ("business-administration", "Business Administration"),
        PoliticalScience => ("political-science", "Political Science"),
        MechanicalEngineering => ("mechanical-engineering", "Mechanical Engineering"),
        Biology => ("biology", "Biology"),
        Chemistry => ("chemistry", "Chemistry"),
        Mathematics => ("mathematics", "Mathematics"),
        English => ("english", "English Literature"),
        Physics => ("physics", "Physics"),
        History => ("history", "History"),
    }
}

impl Major {
    /// Majors advertised as tags on the welcome screen.
    pub const FEATURED: &'static [Self] = &[
        Self::ComputerScience,
        Self::Economics,
        Self::Psychology,
        Self::BusinessAdministration,
        Self::PoliticalScience,
        Self::MechanicalEngineering,
    ];
}

option_set! {
    /// Grading scale the applicant's GPA is reported on.
    pub enum GpaScale {
        FourPoint => ("4.0", "4.0 Scale"),
        FivePoint => ("5.0", "5.0 Scale (Weighted)"),
        Hundred => ("100", "100 Point Scale"),
        Other => ("other", "Other"),
    }
}

/// Advisory bounds for a GPA scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleRange {
    pub min: f32,
    pub max: f32,
    pub average: f32,
}

impl GpaScale {
    /// Range and typical average; `None` for scales without a known ceiling.
    #[must_use]
    pub const fn range(self) -> Option<ScaleRange> {
        match self {
            Self::FourPoint => Some(ScaleRange {
                min: 0.0,
                max: 4.0,
                average: 3.0,
            }),
            Self::FivePoint => Some(ScaleRange {
                min: 0.0,
                max: 5.0,
                average: 3.5,
            }),
            Self::Hundred => Some(ScaleRange {
                min: 0.0,
                max: 100.0,
                average: 85.0,
            }),
            Self::Other => None,
        }
    }
}

option_set! {
    /// Current grade or class level.
    pub enum GradeLevel {
        Freshman => ("freshman", "Freshman (Grade 9)"),
        Sophomore => ("sophomore", "Sophomore (Grade 10)"),
        Junior => ("junior", "Junior (Grade 11)"),
        Senior => ("senior", "Senior (Grade 12)"),
        GapYear => ("gap-year", "Gap Year"),
        CollegeFreshman => ("college-freshman", "College Freshman"),
        CollegeTransfer => ("college-transfer", "Transfer Student"),
        Graduate => ("graduate", "Graduate Student"),
    }
}

option_set! {
    /// Category of extracurricular involvement.
    pub enum ActivityType {
        Sports => ("sports", "Sports/Athletics"),
        Music => ("music", "Music"),
        Drama => ("drama", "Drama/Theater"),
        Debate => ("debate", "Debate/Speech"),
        Volunteering => ("volunteering", "Volunteering/Community Service"),
        AcademicClubs => ("academic-clubs", "Academic Clubs"),
        StudentGovernment => ("student-government", "Student Government"),
        Art => ("art", "Visual Arts"),
        Writing => ("writing", "Writing/Journalism"),
        Research => ("research", "Research Projects"),
        Internships => ("internships", "Internships"),
        Leadership => ("leadership", "Leadership Roles"),
        Competitions => ("competitions", "Academic Competitions"),
        Technology => ("technology", "Technology/Coding"),
        Entrepreneurship => ("entrepreneurship", "Entrepreneurship"),
    }
}

option_set! {
    pub enum ActivityRole {
        President => ("president", "President"),
        VicePresident => ("vice-president", "Vice President"),
        Secretary => ("secretary", "Secretary"),
        Treasurer => ("treasurer", "Treasurer"),
        Captain => ("captain", "Captain"),
        CoCaptain => ("co-captain", "Co-Captain"),
        Member => ("member", "Member"),
        Volunteer => ("volunteer", "Volunteer"),
        Participant => ("participant", "Participant"),
        Founder => ("founder", "Founder"),
        Organizer => ("organizer", "Organizer"),
        TeamLead => ("team-lead", "Team Lead"),
    }
}

option_set! {
    pub enum ActivityDuration {
        LessThanOneYear => ("less-than-1-year", "Less than 1 year"),
        OneYear => ("1-year", "1 year"),
        TwoYears => ("2-years", "2 years"),
        ThreeYears => ("3-years", "3 years"),
        FourPlusYears => ("4-years", "4 years or more"),
        Ongoing => ("ongoing", "Ongoing"),
    }
}

option_set! {
    /// Weekly time commitment for a single activity.
    pub enum HoursBand {
        OneToTwo => ("1-2", "1-2 hours"),
        ThreeToFive => ("3-5", "3-5 hours"),
        SixToTen => ("6-10", "6-10 hours"),
        ElevenToFifteen => ("11-15", "11-15 hours"),
        SixteenToTwenty => ("16-20", "16-20 hours"),
        OverTwenty => ("20+", "20+ hours"),
    }
}

/// Popular schools offered in the university picker, keyed by slug.
pub const UNIVERSITY_CATALOG: &[(&str, &str)] = &[
    ("harvard", "Harvard University"),
    ("stanford", "Stanford University"),
    ("mit", "Massachusetts Institute of Technology"),
    ("yale", "Yale University"),
    ("princeton", "Princeton University"),
    ("columbia", "Columbia University"),
    ("upenn", "University of Pennsylvania"),
    ("brown", "Brown University"),
    ("cornell", "Cornell University"),
    ("dartmouth", "Dartmouth College"),
    ("duke", "Duke University"),
    ("northwestern", "Northwestern University"),
    ("uchicago", "University of Chicago"),
    ("vanderbilt", "Vanderbilt University"),
    ("rice", "Rice University"),
];

/// Resolve a picker value to the stored university name.
///
/// Catalog slugs map to their display name; anything else is treated as a typed
/// name and returned trimmed. Blank input yields `None`.
#[must_use]
pub fn university_name(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let name = UNIVERSITY_CATALOG
        .iter()
        .find_map(|(slug, name)| (*slug == trimmed).then_some(*name))
        .unwrap_or(trimmed);
    Some(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip_through_from_str() {
        for major in Major::ALL {
            assert_eq!(major.as_str().parse::<Major>(), Ok(*major));
        }
        for kind in ActivityType::ALL {
            assert_eq!(kind.as_str().parse::<ActivityType>(), Ok(*kind));
        }
        assert!("astrology".parse::<Major>().is_err());
        assert!("".parse::<GradeLevel>().is_err());
    }

    #[test]
    fn catalogs_have_expected_sizes() {
        assert_eq!(Major::ALL.len(), 12);
        assert_eq!(GpaScale::ALL.len(), 4);
        assert_eq!(GradeLevel::ALL.len(), 8);
        assert_eq!(ActivityType::ALL.len(), 15);
        assert_eq!(ActivityRole::ALL.len(), 12);
        assert_eq!(ActivityDuration::ALL.len(), 6);
        assert_eq!(HoursBand::ALL.len(), 6);
        assert_eq!(UNIVERSITY_CATALOG.len(), 15);
        assert!(Major::FEATURED.iter().all(|m| Major::ALL.contains(m)));
    }

    #[test]
    fn choice_trait_mirrors_inherent_accessors() {
        fn ids<C: Choice>() -> Vec<&'static str> {
            C::all().iter().map(|c| c.id()).collect()
        }
        assert_eq!(ids::<GpaScale>(), ["4.0", "5.0", "100", "other"]);
        assert_eq!(Choice::label(HoursBand::OverTwenty), "20+ hours");
    }

    #[test]
    fn serde_uses_kebab_identifiers() {
        let json = serde_json::to_string(&GradeLevel::GapYear).unwrap();
        assert_eq!(json, "\"gap-year\"");
        let scale: GpaScale = serde_json::from_str("\"100\"").unwrap();
        assert_eq!(scale, GpaScale::Hundred);
        assert_eq!(Major::English.label(), "English Literature");
    }

    #[test]
    fn university_name_resolves_slugs_and_free_text() {
        assert_eq!(
            university_name("mit").as_deref(),
            Some("Massachusetts Institute of Technology")
        );
        assert_eq!(
            university_name("  Reed College ").as_deref(),
            Some("Reed College")
        );
        assert_eq!(university_name("   "), None);
    }

    #[test]
    fn gpa_scale_ranges_match_hints() {
        let four = GpaScale::FourPoint.range().unwrap();
        assert!((four.max - 4.0).abs() < f32::EPSILON);
        assert!((GpaScale::Hundred.range().unwrap().average - 85.0).abs() < f32::EPSILON);
        assert!(GpaScale::Other.range().is_none());
    }
}
