//! Embedded demo lexicon
//!
//! A small curated word list compiled into the binary so the CLI works out
//! of the box without a word file. Three-, four-, and five-letter words,
//! chosen so the classic ladder demos (hit -> cog, work -> play,
//! awake -> sleep, cold -> warm) all resolve.

/// Number of embedded words
pub const WORD_COUNT: usize = 203;

/// Embedded demo words, lowercase ASCII, sorted by length then alphabetically
pub const WORDS: &[&str] = &[
    "bad", "bag", "bat", "bed", "beg", "big", "bit", "bog",
    "bud", "but", "can", "cat", "cog", "con", "cot", "cut",
    "den", "dig", "din", "dog", "don", "dot", "dug", "fan",
    "fig", "fog", "fun", "gun", "gut", "had", "hat", "hen",
    "hit", "hog", "hot", "hug", "jog", "lag", "leg", "lip",
    "lit", "log", "lot", "mad", "man", "map", "mat", "men",
    "net", "not", "nun", "nut", "pan", "pen", "pig", "pin",
    "pit", "pot", "put", "rag", "ran", "rat", "rig", "rot",
    "rug", "run", "sat", "set", "sit", "sun", "tag", "tan",
    "tap", "ten", "tin", "tip", "top", "tot", "bead", "beat",
    "best", "blat", "boat", "bone", "bore", "bort", "card", "case",
    "cash", "cast", "cave", "coat", "code", "cold", "cord", "core",
    "cost", "cote", "cove", "fish", "fist", "flam", "flay", "foam",
    "fork", "form", "game", "gave", "goad", "goat", "gold", "gone",
    "head", "heal", "lead", "load", "mail", "main", "mist", "mode",
    "more", "most", "nose", "note", "peak", "pean", "peat", "perk",
    "pert", "pian", "pirn", "plan", "plat", "play", "plod", "ploy",
    "pood", "pork", "porn", "port", "rain", "rest", "rose", "ruin",
    "ruse", "rust", "tail", "tall", "teal", "tell", "wand", "want",
    "ward", "warm", "wart", "wash", "wert", "wish", "wood", "word",
    "work", "worm", "worn", "wort", "awake", "aware", "brane", "brave",
    "chore", "chose", "clone", "close", "crane", "crone", "grace", "grave",
    "share", "sharn", "shawn", "sheen", "sheep", "sheer", "shewn", "shier",
    "shire", "shirr", "shore", "sleep", "smear", "sneak", "speak", "spear",
    "stack", "steak", "stick", "stock", "stone", "store", "sware", "swear",
    "sweat", "trace", "track",
];
