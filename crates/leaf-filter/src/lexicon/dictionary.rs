//! Built-in vocabularies.
//!
//! Terms are stored lowercase. Multi-word entries are matched as phrases.

/// General-purpose English dictionary.
///
/// A curated list of slurs, sexual terms and swearing. Mild or ambiguous
/// words (`butt`, `suck`, `escort`) are left out to keep whole-word matching
/// quiet on ordinary community posts; operators add them via `extra_words`.
pub const ENGLISH: &[&str] = &[
    "anal",
    "anilingus",
    "anus",
    "arse",
    "arsehole",
    "ass",
    "asses",
    "asshole",
    "assholes",
    "assmunch",
    "bastard",
    "bastards",
    "bitch",
    "bitches",
    "bitching",
    "blowjob",
    "bollocks",
    "boner",
    "boob",
    "boobs",
    "bukkake",
    "bulldyke",
    "bullshit",
    "bunghole",
    "butthole",
    "camslut",
    "camwhore",
    "carpetmuncher",
    "circlejerk",
    "clit",
    "clitoris",
    "clusterfuck",
    "cock",
    "cocks",
    "cocksucker",
    "cornhole",
    "crap",
    "cum",
    "cumming",
    "cunnilingus",
    "cunt",
    "cunts",
    "darkie",
    "deepthroat",
    "dick",
    "dickhead",
    "dickheads",
    "dildo",
    "dipshit",
    "douche",
    "douchebag",
    "dyke",
    "ejaculation",
    "fag",
    "faggot",
    "fellatio",
    "fisting",
    "footjob",
    "fuck",
    "fucked",
    "fucker",
    "fuckers",
    "fucking",
    "fucks",
    "fudgepacker",
    "goatse",
    "handjob",
    "hentai",
    "horny",
    "jackass",
    "jailbait",
    "jerk-off",
    "jerkoff",
    "jigaboo",
    "jizz",
    "kike",
    "masturbate",
    "masturbating",
    "milf",
    "motherfucker",
    "motherfuckers",
    "motherfucking",
    "nigga",
    "nigger",
    "nude",
    "nympho",
    "orgasm",
    "paedophile",
    "pedophile",
    "penis",
    "piece of shit",
    "piss",
    "pissed",
    "pissing",
    "porn",
    "porno",
    "pornography",
    "prick",
    "pussy",
    "queaf",
    "raghead",
    "rape",
    "rapist",
    "retard",
    "rimjob",
    "schlong",
    "scrotum",
    "semen",
    "sex",
    "shemale",
    "shit",
    "shithead",
    "shits",
    "shitty",
    "slanteye",
    "slut",
    "sluts",
    "sodomy",
    "son of a bitch",
    "spic",
    "spooge",
    "tits",
    "titties",
    "tosser",
    "towelhead",
    "tranny",
    "twat",
    "vagina",
    "wank",
    "wanker",
    "wetback",
    "white power",
    "whore",
    "whores",
    "zoophilia",
];

/// Transliterated Hindi/Hinglish vocabulary.
pub const HINGLISH: &[&str] = &[
    "aand",
    "aandu",
    "balatkar",
    "balatkari",
    "behen chod",
    "beti chod",
    "bhadva",
    "bhadve",
    "bhandve",
    "bhangi",
    "bhootni ke",
    "bhosad",
    "bhosadi ke",
    "boobe",
    "chakke",
    "chinaal",
    "chinki",
    "chod",
    "chodu",
    "chodu bhagat",
    "chooche",
    "choochi",
    "choope",
    "choot",
    "choot ke baal",
    "chootia",
    "chootiya",
    "chuche",
    "chuchi",
    "chudaap",
    "chudai khanaa",
    "chudam chudai",
    "chude",
    "chut",
    "chut ka chuha",
    "chut ka churan",
    "chut ka mail",
    "chut ke baal",
    "chut ke dhakkan",
    "chut maarli",
    "chutad",
    "chutadd",
    "chutan",
    "chutia",
    "chutiya",
    "gaand",
    "gaandfat",
    "gaandmasti",
    "gaandufad",
    "gandfattu",
    "gandu",
    "gashti",
    "gasti",
    "ghassa",
    "ghasti",
    "gucchi",
    "gucchu",
    "harami",
    "haramzade",
    "hawas",
    "hawas ke pujari",
    "hijda",
    "hijra",
    "jhant",
    "jhant chaatu",
    "jhant ka keeda",
    "jhant ke baal",
    "jhant ke pissu",
    "jhantu",
    "kamine",
    "kaminey",
    "kanjar",
    "kutta",
    "kutta kamina",
    "kutte ki aulad",
    "kutte ki jat",
    "kuttiya",
    "loda",
    "lodu",
    "lund",
    "lund choos",
    "lund ka bakkal",
    "lund khajoor",
    "lundtopi",
    "lundure",
    "maa ki chut",
    "maal",
    "madar chod",
    "madarchod",
    "madhavchod",
    "mooh mein le",
    "mutth",
    "mutthal",
    "najayaz",
    "najayaz aulaad",
    "najayaz paidaish",
    "paki",
    "pataka",
    "patakha",
    "raand",
    "randaap",
    "randi",
    "randi rona",
    "saala",
    "saala kutta",
    "saali kutti",
    "saali randi",
    "suar",
    "suar ke lund",
    "suar ki aulad",
    "tatte",
    "tatti",
    "teri maa ka bhosada",
    "teri maa ka boba chusu",
    "teri maa ka behenchod",
    "teri maa ka chut",
    "tharak",
    "tharki",
    "tu chuda",
];

/// Hinglish terms most often spelled creatively; expanded through
/// [`generate_variants`](super::generate_variants).
pub const HINGLISH_KEY_WORDS: &[&str] = &[
    "behenchod",
    "bhenchod",
    "bhosdi",
    "chutiya",
    "gandu",
    "harami",
    "kamina",
    "lawda",
    "madarchod",
];

/// Suffixes appended to key-word stems.
pub const VARIANT_SUFFIXES: &[&str] = &["e", "o", "i", "a", "on", "an", "en", "in"];
