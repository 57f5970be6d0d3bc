//! Static phrase tables mapping everyday language to canonical tags.
//!
//! Tables are declared in the order a maintainer would group them and are
//! scanned longest phrase first. The sorted view is built once on first use
//! and shared by every caller; nothing here is ever mutated.

use std::cmp::Reverse;
use std::sync::OnceLock;

use trainer_search_core::FitnessLevel;

/// A read-only phrase table with a lazily built longest-first view.
///
/// # Examples
/// ```
/// use trainer_search_intent::taxonomy::GOALS;
///
/// let tags: Vec<_> = GOALS.matches("help me bulk up").collect();
/// assert_eq!(tags, [&&["strength_training", "bodybuilding"][..]]);
/// ```
#[derive(Debug)]
pub struct PhraseTable<T: 'static> {
    entries: &'static [(&'static str, T)],
    longest_first: OnceLock<Vec<&'static (&'static str, T)>>,
}

impl<T: 'static> PhraseTable<T> {
    const fn new(entries: &'static [(&'static str, T)]) -> Self {
        Self {
            entries,
            longest_first: OnceLock::new(),
        }
    }

    /// Entries in declaration order.
    #[must_use]
    pub const fn entries(&self) -> &'static [(&'static str, T)] {
        self.entries
    }

    /// Number of phrases in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether the table has no phrases.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by phrase length, longest first.
    ///
    /// Phrases of equal length keep their declaration order.
    #[must_use]
    pub fn longest_first(&self) -> &[&'static (&'static str, T)] {
        self.longest_first.get_or_init(|| {
            let mut sorted: Vec<_> = self.entries.iter().collect();
            sorted.sort_by_key(|(phrase, _)| Reverse(phrase.len()));
            sorted
        })
    }

    /// Values of every phrase contained in `text`, longest phrase first.
    ///
    /// `text` is expected to be lower-cased already. Matched spans are not
    /// consumed, so a short phrase inside a longer one also matches.
    pub fn matches<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'static T> + 't {
        self.longest_first()
            .iter()
            .copied()
            .filter(move |(phrase, _)| text.contains(phrase))
            .map(|(_, value)| value)
    }
}

/// Goal phrases. One phrase may imply several goals.
pub static GOALS: PhraseTable<&'static [&'static str]> = PhraseTable::new(GOAL_PHRASES);
/// Training style phrases.
pub static STYLES: PhraseTable<&'static str> = PhraseTable::new(STYLE_PHRASES);
/// Fitness level phrases.
pub static LEVELS: PhraseTable<FitnessLevel> = PhraseTable::new(LEVEL_PHRASES);
/// Health condition phrases.
pub static HEALTH_CONDITIONS: PhraseTable<&'static str> = PhraseTable::new(HEALTH_PHRASES);

const GOAL_PHRASES: &[(&str, &[&str])] = &[
    // weight management
    ("lose weight", &["weight_loss"]),
    ("weight loss", &["weight_loss"]),
    ("fat loss", &["weight_loss"]),
    ("slim down", &["weight_loss"]),
    ("burn fat", &["weight_loss"]),
    ("get lean", &["weight_loss"]),
    ("shed pounds", &["weight_loss"]),
    ("cut weight", &["weight_loss"]),
    // strength
    ("build muscle", &["strength_training"]),
    ("muscle gain", &["strength_training"]),
    ("get strong", &["strength_training"]),
    ("strength", &["strength_training"]),
    ("bulk up", &["strength_training", "bodybuilding"]),
    ("powerlifting", &["powerlifting", "strength_training"]),
    ("strongman", &["strongman", "strength_training"]),
    ("kettlebell", &["kettlebell", "strength_training"]),
    // bodybuilding
    ("bodybuilding", &["bodybuilding"]),
    ("body building", &["bodybuilding"]),
    ("physique", &["bodybuilding"]),
    ("contest prep", &["bodybuilding"]),
    // yoga and flexibility
    ("yoga", &["yoga"]),
    ("flexibility", &["flexibility"]),
    ("stretch", &["flexibility"]),
    ("stretching", &["flexibility"]),
    ("meditation", &["meditation"]),
    ("mindfulness", &["meditation"]),
    ("breathwork", &["meditation"]),
    ("pilates", &["pilates"]),
    // rehab and recovery
    ("rehabilitation", &["rehabilitation"]),
    ("rehab", &["rehabilitation"]),
    ("recovery", &["rehabilitation"]),
    ("injury", &["rehabilitation"]),
    ("post-injury", &["rehabilitation"]),
    ("posture", &["posture_correction"]),
    // prenatal and postnatal
    ("pregnancy", &["prenatal"]),
    ("pregnant", &["prenatal"]),
    ("prenatal", &["prenatal"]),
    ("postnatal", &["postnatal"]),
    ("postpartum", &["postnatal"]),
    ("after pregnancy", &["postnatal"]),
    // conditioning
    ("hiit", &["hiit"]),
    ("high intensity", &["hiit"]),
    ("interval training", &["hiit"]),
    ("cardio", &["cardio"]),
    ("endurance", &["endurance"]),
    ("running", &["running", "endurance"]),
    ("marathon", &["running", "endurance"]),
    ("triathlon", &["triathlon", "endurance"]),
    ("crossfit", &["crossfit"]),
    ("cross fit", &["crossfit"]),
    // combat sports
    ("boxing", &["boxing"]),
    ("kickboxing", &["boxing", "martial_arts"]),
    ("martial arts", &["martial_arts"]),
    ("mma", &["mma", "martial_arts"]),
    ("muay thai", &["martial_arts", "boxing"]),
    ("jiu jitsu", &["martial_arts"]),
    // water and dance
    ("swimming", &["swimming"]),
    ("swim", &["swimming"]),
    ("dance", &["dance_fitness"]),
    ("zumba", &["dance_fitness"]),
    // sports performance
    ("sports performance", &["sports_performance"]),
    ("athletic", &["sports_performance"]),
    ("speed", &["speed_agility"]),
    ("agility", &["speed_agility"]),
    // bodyweight
    ("calisthenics", &["calisthenics"]),
    ("bodyweight", &["calisthenics", "bodyweight"]),
    // seniors
    ("senior", &["senior_fitness"]),
    ("elderly", &["senior_fitness"]),
    ("over 50", &["senior_fitness"]),
    ("over 55", &["senior_fitness"]),
    ("fall prevention", &["senior_fitness"]),
    // functional and misc
    ("functional", &["functional_training"]),
    ("bootcamp", &["bootcamp"]),
    ("boot camp", &["bootcamp"]),
    ("nutrition", &["nutrition"]),
    ("diet", &["nutrition"]),
    ("meal plan", &["nutrition"]),
    ("home workout", &["home_workouts"]),
    ("at home", &["home_workouts"]),
    ("olympic lifting", &["olympic_lifting"]),
    ("parkour", &["parkour"]),
    ("climbing", &["climbing"]),
    ("core", &["core_training"]),
    ("abs", &["core_training"]),
    ("mobility", &["mobility"]),
    ("balance", &["balance"]),
];

const STYLE_PHRASES: &[(&str, &str)] = &[
    ("one on one", "one_on_one"),
    ("1 on 1", "one_on_one"),
    ("private", "one_on_one"),
    ("personal", "one_on_one"),
    ("group", "group"),
    ("class", "group"),
    ("classes", "group"),
    ("online", "online"),
    ("virtual", "online"),
    ("remote", "online"),
    ("video", "online"),
];

const LEVEL_PHRASES: &[(&str, FitnessLevel)] = &[
    ("just starting", FitnessLevel::Beginner),
    ("new to", FitnessLevel::Beginner),
    ("never trained", FitnessLevel::Beginner),
    ("first time", FitnessLevel::Beginner),
    ("beginner", FitnessLevel::Beginner),
    ("some experience", FitnessLevel::Intermediate),
    ("intermediate", FitnessLevel::Intermediate),
    ("experienced", FitnessLevel::Advanced),
    ("competitive", FitnessLevel::Advanced),
    ("advanced", FitnessLevel::Advanced),
    ("pro", FitnessLevel::Advanced),
    ("elite", FitnessLevel::Advanced),
];

const HEALTH_PHRASES: &[(&str, &str)] = &[
    ("knee injury", "knee_injury"),
    ("bad knee", "knee_injury"),
    ("knee pain", "knee_injury"),
    ("back pain", "back_pain"),
    ("back injury", "back_pain"),
    ("bad back", "back_pain"),
    ("shoulder injury", "shoulder_injury"),
    ("shoulder pain", "shoulder_injury"),
    ("asthma", "asthma"),
    ("diabetes", "diabetes"),
    ("heart condition", "heart_condition"),
    ("arthritis", "arthritis"),
    ("high blood pressure", "hypertension"),
    ("hypertension", "hypertension"),
    ("obesity", "obesity"),
    ("overweight", "obesity"),
];
