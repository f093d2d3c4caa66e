//! Static Christian-canon book tables.
//!
//! `BOOK_ALIASES` maps each canonical title to its accepted abbreviations.
//! The upstream data carried a handful of literal duplicate rows; the table
//! here holds each book once, and registry construction is first-wins anyway.

/// Canonical title plus accepted abbreviations, in resolution order.
pub(crate) const BOOK_ALIASES: &[(&str, &[&str])] = &[
    ("Genesis", &["Gen", "Ge", "Gn"]),
    ("Exodus", &["Exod", "Ex", "Exo"]),
    ("Leviticus", &["Lev", "Lv", "Le"]),
    ("Numbers", &["Num", "Nu", "Nm", "Nb"]),
    ("Deuteronomy", &["Deut", "Dt", "De"]),
    ("Joshua", &["Josh", "Jos", "Jsh"]),
    ("Judges", &["Judg", "Jdg", "Jdgs", "Jg"]),
    ("Ruth", &["Ruth", "Ru", "Rth"]),
    (
        "1 Samuel",
        &["1 Sam", "1 Sm", "1 Sa", "I Sam", "I Sa", "I Sm", "First Samuel", "First Sam"],
    ),
    (
        "2 Samuel",
        &["2 Sam", "2 Sm", "2 Sa", "II Sam", "II Sa", "II Sm", "Second Samuel", "Second Sam"],
    ),
    (
        "1 Kings",
        &[
            "1 Kings", "1 Kgs", "1 Ki", "1Kgs", "1Kin", "1Ki", "1K", "I Kgs", "I Ki",
            "1st Kings", "1st Kgs", "First Kings", "First Kgs",
        ],
    ),
    (
        "2 Kings",
        &[
            "2 Kings", "2 Kgs", "2 Ki", "2Kgs", "2Kin", "2Ki", "2K", "II Kgs", "II Ki",
            "2nd Kings", "2nd Kgs", "Second Kings", "Second Kgs",
        ],
    ),
    (
        "1 Chronicles",
        &[
            "1 Chron", "1 Chr", "1 Ch", "1Chron", "1Chr", "1Ch", "I Chron", "I Chr", "I Ch",
            "1st Chronicles", "1st Chron", "First Chronicles", "First Chron",
        ],
    ),
    (
        "2 Chronicles",
        &[
            "2 Chron", "2 Chr", "2 Ch", "2Chron", "2Chr", "2Ch", "II Chron", "II Chr", "II Ch",
            "2nd Chronicles", "2nd Chron", "Second Chronicles", "Second Chron",
        ],
    ),
    ("Ezra", &["Ez", "Ezr"]),
    ("Nehemiah", &["Neh", "Ne"]),
    ("Esther", &["Esth", "Est", "Es"]),
    ("Job", &["Jb"]),
    ("Psalms", &["Ps", "Psa", "Psm", "Pss", "Psalm", "Pslm"]),
    ("Proverbs", &["Prov", "Prv", "Pr", "Pro"]),
    ("Ecclesiastes", &["Eccles", "Eccle", "Eccl", "Ecc", "Qoheleth", "Qoh"]),
    (
        "Song of Songs",
        &["Song", "SoS", "Song of Solomon", "So", "Canticles", "Canticle of Canticles", "Cant"],
    ),
    ("Isaiah", &["Isa", "Is"]),
    ("Jeremiah", &["Jer", "Je", "Jr"]),
    ("Lamentations", &["Lam", "La", "Lament"]),
    ("Ezekiel", &["Ezek", "Eze", "Ezk"]),
    ("Daniel", &["Dan", "Dn", "Da"]),
    ("Hosea", &["Hos", "Ho"]),
    ("Joel", &["Jl"]),
    ("Amos", &["Am"]),
    ("Obadiah", &["Obad", "Ob"]),
    ("Jonah", &["Jon", "Jnh"]),
    ("Micah", &["Mic", "Mc"]),
    ("Nahum", &["Nah", "Na"]),
    ("Habakkuk", &["Hab", "Hb"]),
    ("Zephaniah", &["Zeph", "Zep", "Zp"]),
    ("Haggai", &["Hag", "Hg"]),
    ("Zechariah", &["Zech", "Zec", "Zc"]),
    ("Malachi", &["Mal", "Ml"]),
    ("Matthew", &["Matt", "Mt"]),
    ("Mark", &["Mar", "Mk", "Mrk", "Mr"]),
    ("Luke", &["Lk", "L"]),
    ("John", &["Jn", "Jhn", "Joh"]),
    ("Acts", &["Ac", "Act"]),
    ("Romans", &["Rom", "Ro", "Rm"]),
    (
        "1 Corinthians",
        &[
            "1 Cor", "1 Co", "I Cor", "I Co", "1Cor", "1Co", "I Corinthians", "1Corinthians",
            "1st Corinthians", "First Corinthians",
        ],
    ),
    (
        "2 Corinthians",
        &[
            "2 Cor", "2 Co", "II Cor", "II Co", "2Cor", "2Co", "II Corinthians", "2Corinthians",
            "2nd Corinthians", "Second Corinthians",
        ],
    ),
    ("Galatians", &["Gal", "Ga"]),
    ("Ephesians", &["Eph", "Ep", "Ephes"]),
    ("Philippians", &["Phil", "Php", "Phl", "Pp"]),
    ("Colossians", &["Col", "Cl"]),
    (
        "1 Thessalonians",
        &[
            "1 Thess", "1 Thes", "1 Th", "I Thessalonians", "I Thess", "I Thes", "I Th",
            "1Thessalonians", "1Thess", "1Thes", "1Th", "1st Thessalonians", "1st Thess",
            "First Thessalonians", "First Thess",
        ],
    ),
    (
        "2 Thessalonians",
        &[
            "2 Thess", "2 Thes", "2 Th", "II Thessalonians", "II Thess", "II Thes", "II Th",
            "2Thessalonians", "2Thess", "2Thes", "2Th", "2nd Thessalonians", "2nd Thess",
            "Second Thessalonians", "Second Thess",
        ],
    ),
    (
        "1 Timothy",
        &[
            "1 Tim", "1 Ti", "I Timothy", "I Tim", "I Ti", "1Timothy", "1Tim", "1Ti",
            "1st Timothy", "1st Tim", "First Timothy", "First Tim",
        ],
    ),
    (
        "2 Timothy",
        &[
            "2 Tim", "2 Ti", "II Timothy", "II Tim", "II Ti", "2Timothy", "2Tim", "2Ti",
            "2nd Timothy", "2nd Tim", "Second Timothy", "Second Tim",
        ],
    ),
    ("Titus", &["Titus", "Tit", "ti"]),
    ("Philemon", &["Philem", "Phm", "Pm"]),
    ("Hebrews", &["Heb"]),
    ("James", &["James", "Jas", "Jm"]),
    (
        "1 Peter",
        &[
            "1 Pet", "1 Pe", "1 Pt", "1 P", "I Pet", "I Pt", "I Pe", "1Peter", "1Pet", "1Pe",
            "1Pt", "1P", "I Peter", "1st Peter", "First Peter",
        ],
    ),
    (
        "2 Peter",
        &[
            "2 Pet", "2 Pe", "2 Pt", "2 P", "II Peter", "II Pet", "II Pt", "II Pe", "2Peter",
            "2Pet", "2Pe", "2Pt", "2P", "2nd Peter", "Second Peter",
        ],
    ),
    (
        "1 John",
        &[
            "1 John", "1 Jhn", "1 Jn", "1 J", "1John", "1Jhn", "1Joh", "1Jn", "1Jo", "1J",
            "I John", "I Jhn", "I Joh", "I Jn", "I Jo", "1st John", "First John",
        ],
    ),
    (
        "2 John",
        &[
            "2 John", "2 Jhn", "2 Jn", "2 J", "2John", "2Jhn", "2Joh", "2Jn", "2Jo", "2J",
            "II John", "II Jhn", "II Joh", "II Jn", "II Jo", "2nd John", "Second John",
        ],
    ),
    (
        "3 John",
        &[
            "3 John", "3 Jhn", "3 Jn", "3 J", "3John", "3Jhn", "3Joh", "3Jn", "3Jo", "3J",
            "III John", "III Jhn", "III Joh", "III Jn", "III Jo", "3rd John", "Third John",
        ],
    ),
    ("Jude", &["Jude", "Jud", "Jd"]),
    ("Revelation", &["Rev", "Re", "The Revelation"]),
    ("Tobit", &["Tob", "Tb"]),
    ("Judith", &["Jth", "Jdth", "Jdt"]),
    (
        "Additions to Esther",
        &["Add Esth", "Add Es", "Rest of Esther", "The Rest of Esther", "AEs", "AddEsth"],
    ),
    ("Wisdom of Solomon", &["Wisd of Sol", "Wisdom", "Wis", "Ws"]),
    ("Sirach", &["Sir", "Ecclesiasticus"]),
    ("Ecclesiasticus", &["Ecclus"]),
    ("Baruch", &["Bar"]),
    ("Letter of Jeremiah", &["Ep Jer", "Let Jer", "Ltr Jer", "LJe"]),
    (
        "Song of Three Youths",
        &[
            "Sg of 3 Childr",
            "Song of Three",
            "Song of Thr",
            "Song Thr",
            "The Song of Three Youths",
            "The Song of the Three Holy Children",
            "Song of the Three Holy Children",
            "Song of Three Children",
            "The Song of Three Jews",
            "Song of Three Jews",
            "Prayer of Azariah",
            "Azariah",
            "Pr Az",
        ],
    ),
    ("Susanna", &["Sus"]),
    ("Bel and the Dragon", &["Bel"]),
    (
        "1 Maccabees",
        &[
            "1 Macc", "1 Mac", "1Maccabees", "1Macc", "1Mac", "1Ma", "1M", "I Maccabees",
            "I Macc", "I Mac", "I Ma", "1st Maccabees", "First Maccabees",
        ],
    ),
    (
        "2 Maccabees",
        &[
            "2 Macc", "2 Mac", "2Maccabees", "2Macc", "2Mac", "2Ma", "2M", "II Maccabees",
            "II Macc", "II Mac", "II Ma", "2nd Maccabees", "Second Maccabees",
        ],
    ),
    (
        "3 Maccabees",
        &[
            "3 Macc", "3 Mac", "3Maccabees", "3Macc", "3Mac", "3Ma", "3M", "III Maccabees",
            "III Macc", "III Mac", "III Ma", "3rd Maccabees", "Third Maccabees",
        ],
    ),
    (
        "4 Maccabees",
        &[
            "4 Macc", "4 Mac", "4Maccabees", "4Macc", "4Mac", "4Ma", "4M", "IV Maccabees",
            "IV Macc", "IV Mac", "IV Ma", "4th Maccabees", "Fourth Maccabees",
        ],
    ),
    (
        "1 Esdras",
        &[
            "1 Esd", "1 Esdr", "1Esdras", "1Esdr", "1Esd", "1Es", "I Esdras", "I Esdr", "I Esd",
            "I Es", "1st Esdras", "First Esdras",
        ],
    ),
    (
        "2 Esdras",
        &[
            "2 Esd", "2 Esdr", "2Esdras", "2Esdr", "2Esd", "2Es", "II Esdras", "II Esdr",
            "II Esd", "II Es", "2nd Esdras", "Second Esdras",
        ],
    ),
    ("Prayer of Manasseh", &["Pr of Man", "PMa", "Prayer of Manasses"]),
    ("Additional Psalm", &["Add Psalm", "Add Ps"]),
    ("Ode", &["Ode"]),
    ("Psalms of Solomon", &["Ps Solomon", "Ps Sol", "Psalms Solomon", "PsSol"]),
    (
        "Epistle to the Laodiceans",
        &[
            "Ep Lao",
            "Epistle to Laodiceans",
            "Epistle Laodiceans",
            "Epist Laodiceans",
            "Ep Laod",
            "Laodiceans",
            "Laod",
        ],
    ),
];

/// Ordered Christian-canon titles the keyword scanner recognizes.
///
/// Order is significant: the scanner's alternation prefers earlier entries,
/// so "Psalm" shadows "Psalm 151" in running text.
pub(crate) const SCAN_TITLES: &[&str] = &[
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    "1 Samuel",
    "2 Samuel",
    "1 Kings",
    "2 Kings",
    "1 Chronicles",
    "2 Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalm",
    "Proverbs",
    "Ecclesiastes",
    "Song of Songs",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    "1 Corinthians",
    "2 Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    "1 Thessalonians",
    "2 Thessalonians",
    "1 Timothy",
    "2 Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    "1 Peter",
    "2 Peter",
    "1 John",
    "2 John",
    "3 John",
    "Jude",
    "Revelation",
    "Tobit",
    "Judith",
    "Greek Esther",
    "Wisdom of Solomon",
    "Sirach",
    "Baruch",
    "Letter of Jeremiah",
    "Prayer of Azariah",
    "Susanna",
    "Bel and the Dragon",
    "1 Maccabees",
    "2 Maccabees",
    "1 Esdras",
    "Prayer of Manasseh",
    "Psalm 151",
    "3 Maccabees",
    "2 Esdras",
    "4 Maccabees",
];
