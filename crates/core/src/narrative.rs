//! Static dashboard copy.
//!
//! Paragraph strings use inline `**bold**`, `*italic*` and `[text](url)`
//! markup. Wording, spelling quirks included, is kept as published with the
//! analysis; the numbers in this module come from the offline network study
//! and are not recomputed.

/// Page title shown above every page.
pub const DASHBOARD_TITLE: &str = "Simpsons Dataset Analysis";

/// Sidebar illustration.
pub const SIDEBAR_IMAGE: &str = "homer.png";

/// A precomputed chart shipped with the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub file: &'static str,
    pub caption: &'static str,
}

/// The meaning of one dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDoc {
    pub column: &'static str,
    pub meaning: &'static str,
}

// ---------------------------------------------------------------------------
// Introduction
// ---------------------------------------------------------------------------

pub const INTRO_BYLINE: &[&str] = &[
    "Computational Social Science - DTU 2024",
    "Lluís Llull - s237198",
];

pub const INTRO_PARTS_LEAD: &str = "The project is divided into three main parts, which can be switched in the sidebar. The parts are the following:";

pub const INTRO_PARTS: &[&str] = &[
    "**Introduction**: A brief explanation of the project and the motivation behind it.",
    "**Data**: This part is focused on a general data analysis of the datasets. It includes the description of the datasets, some stats, and some plots.",
    "**Network**:The last part is focused on the network analysis and the study of the objectives of the project.",
];

pub const MOTIVATION_QUESTION: &str = "Why did you choose this project?";

pub const MOTIVATION: &str = "The Simpsons dataset excels for my research because it acts as a social mirror. It reflects societal norms and trends through humor, allowing to potentially identify biases and changing perspectives on inclusion (racism, homophobia) over its impressive three-decade run. Plus, the show's popularity makes the analysis engaging and attractive, sparking broader interest in social issues.";

pub const OBJECTIVES_QUESTION: &str = "What are the main objectives of the project?";

pub const OBJECTIVES: &[&str] = &[
    "Network Analysis of the Simpsons",
    "Community Detection in Springfield",
    "Influence Propagation in Springfield",
    "Evolution of the Network, including inclusion and ideology",
];

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

pub const DATASET_QUESTION: &str = "What is your dataset?";

pub const RAW_DATASET: &str = "We have one *raw dataset* (simpsons_ep-char.csv) where we have all the characters that appear in every episode, from that dataset we obtained the two definitive datasets  using techniques of web scrapping to the [*Simpsons Wiki*](https://simpsons.fandom.com/wiki/Simpsons_Wiki)";

pub const EPISODES_SUMMARY: &str = "***episodes.csv*** ->  Every episode, with all the characters appearing, season, date of the episode, etc.";

pub const EPISODE_COLUMNS: &[ColumnDoc] = &[
    ColumnDoc { column: "episode_id", meaning: "Id of the episode" },
    ColumnDoc { column: "character_id", meaning: "Character appearing in the episode" },
    ColumnDoc { column: "season", meaning: "Season of the episode" },
    ColumnDoc { column: "year", meaning: "Year of the episode" },
];

pub const EPISODES_EXAMPLE: &str = "Example of the episodes dataset:";

pub const CHARACTERS_SUMMARY: &str = "***characters.csv*** -> All the characters with general information such as name, genre, first_appearance, married, etc,**";

pub const CHARACTER_COLUMNS: &[ColumnDoc] = &[
    ColumnDoc { column: "character_id", meaning: "Id of the character" },
    ColumnDoc { column: "name", meaning: "Name of the character" },
    ColumnDoc { column: "male", meaning: "If True the character is a male, otherwise is a female" },
    ColumnDoc { column: "lgbt", meaning: "If True the character is part of the LGTB collective" },
    ColumnDoc { column: "married", meaning: "If True the character is married, otherwise is not" },
    ColumnDoc { column: "smoker", meaning: "If True the character is a regular smoker, otherwise is not" },
    ColumnDoc { column: "first_appearance", meaning: "Id of the first episode where appeared the character" },
    ColumnDoc { column: "voice_actor", meaning: "Name of the real actor who puts voice to the character" },
    // Published with the `male` description and the header spelled as in
    // the first dataset release.
    ColumnDoc { column: "num_apperanaces", meaning: "If True the character is a male, otherwise is a Female" },
    ColumnDoc { column: "text", meaning: "Short and general description of the character" },
    ColumnDoc { column: "tokens", meaning: "Tf-Idf obtained of the *text*. Applying, tokenization, removing stopwords, and stemming" },
];

pub const CHARACTERS_EXAMPLE: &str = "Example of the characters dataset:";

pub const RAW_COLUMNS: &[ColumnDoc] = &[
    ColumnDoc { column: "episode_id", meaning: "Id of the episode" },
    ColumnDoc { column: "character_id", meaning: "Character appearing in the episode" },
];

pub const BRIEF_ANALYSIS_HEADING: &str = "Brief Data Analysis";

/// Charts closing the Data page, each preceded by its lead-in sentence.
pub const DATA_CHARTS: &[(&str, ImageRef)] = &[
    (
        "Stats of some attributes of the characters:",
        ImageRef { file: "data_analysis.png", caption: "Data analysis" },
    ),
    (
        "First appearances of the characters over the seasons:",
        ImageRef { file: "first_apperances.png", caption: "Data analysis" },
    ),
    (
        "Characteristics of the main characters:",
        ImageRef { file: "main_characters.png", caption: "Main characters" },
    ),
];

// ---------------------------------------------------------------------------
// Networks
// ---------------------------------------------------------------------------

pub const EVOLUTION_HEADING: &str = "Network evolution";

pub const EVOLUTION_REPRESENTATION: &str = "First of all, it is important to comment on how the networks have been **represented**. The main characters are depicted in light yellow, characters that appear only once are represented in blue, and all other characters are shown in a darker shade of yellow. Additionally, the names of the 10 most connected characters in the network have been listed.";

pub const EVOLUTION_GROWTH: &str = "If we focus on the image, a priori, it is clearly observed how the **network grows**, one of the most outstanding points being the significant importance acquired by the **main characters** (Homer, Lisa, Marge, Bart and Maggie). Additionally, we can also see how the characters that appear only once (represented in blue) become almost **non-existent** in the last season, while in the first season they can still be visualized. Finally, the differences between more and less **connected characters** are accentuated.";

pub const EVOLUTION_IMAGE: ImageRef = ImageRef {
    file: "evolution_network.png",
    caption: "Evolution Network",
};

pub const SEASON_PROPERTIES_COMMENTARY: &str = "Looking in more detail the the **Networks** generated every season, we can see that the network **undergoes expansion with each passing season**, as evidenced by the escalating count of nodes and edges. This growth is mirrored in the increasing average degree, reflecting heightened character interactions as the number of episodes rises. Conversely, metrics such as average clustering, average shortest path, and diameter demonstrate a remarkable degree of **onstancy**. This stability underscores the network's ability to maintain its fundamental properties despite substantial expansion over successive seasons.";

pub const SMOKERS_HEADING: &str = "Smokers communities";

pub const SMOKERS_CLUSTERS: &str = "We see here how the network is divided into **two main clusters**, one of smokers and the other of non-smokers. This division is consistent throughout the seasons, with the smokers' cluster **remaining relatively stable** in size and composition. The non-smokers' cluster, however, undergoes significant growth, reflecting the increasing number of characters who do not smoke.";

pub const SMOKERS_RELATIONS: &str = "Let's see how the relations between the two groups, the smokers and no smokers. With the following stats, we can see that the characters in **the smoker's group tend to be more connected** to them than the characters in the no-smokers group. Not only that, but also in season 25 is reflected that the characters **tend to be connected more times **(higher weight in the graph). That makes sense, for example, there is the 'Mafia' example, where all the characters who belong the the Mafia are connected between them, and they are all smokers.";

pub const SMOKERS_CONCLUSION: &str = "To summarize, it is seen that smokers are very connected with other smokers. Not only connected with a greater quantity of smoker characters but also connected more times (higher weight in the graph). Here we see the difference in the Network through the seasons, where the smokers group is represented in red and the no-smokers group in yellow.";

/// Labeling policy of the dataset: smoker status covers a character's whole
/// run, including seasons before they are first shown smoking.
pub const SMOKER_LABEL_NOTE: &str = "Note: we consider smokers the characters that have smoked at some point in the series, so could happen for example that in season 1 the character has not smoked yet, but we consider the character as *a smoker*. Even this, I think that it is not a big problem because the characters (except the main ones) generally are constant and do not change their personality during the show.";

pub const SMOKERS_IMAGE: ImageRef = ImageRef {
    file: "smokers.png",
    caption: "Smokers clusters",
};

/// Edge statistics for one group pair in a season network.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeGroupStats {
    pub possible_edges: u64,
    pub actual_edges: u64,
    /// Share of possible edges present, in percent.
    pub density_pct: f64,
    pub average_weight: f64,
}

/// Smoker vs non-smoker partition summary of one season.
///
/// `headline` and `lines` are the text shown on the page, as published.
/// The numeric fields carry the same figures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmokerSeasonSummary {
    pub season: u32,
    pub smokers: u64,
    pub non_smokers: u64,
    pub among_smokers: EdgeGroupStats,
    pub among_non_smokers: EdgeGroupStats,
    pub across_groups: EdgeGroupStats,
    pub headline: &'static str,
    pub lines: &'static [&'static str],
}

pub const SMOKER_SUMMARIES: &[SmokerSeasonSummary] = &[
    SmokerSeasonSummary {
        season: 1,
        smokers: 17,
        non_smokers: 45,
        among_smokers: EdgeGroupStats {
            possible_edges: 136,
            actual_edges: 44,
            density_pct: 32.35,
            average_weight: 1.07,
        },
        among_non_smokers: EdgeGroupStats {
            possible_edges: 990,
            actual_edges: 204,
            density_pct: 20.61,
            average_weight: 1.22,
        },
        across_groups: EdgeGroupStats {
            possible_edges: 765,
            actual_edges: 193,
            density_pct: 25.23,
            average_weight: 1.24,
        },
        headline: "**Season 1 - Number of smokers: 17 & Number of not smokers: 45**",
        lines: &[
            "Possible edges between smokers: 136.0 Actual edges between smokers: 44 (32.35%)",
            "Average weight between smokers 1.07",
            "Possible edges between not smokers: 990.0 Actual edges between not smokers: 204 (20.61%)",
            "Average weight between not smokers 1.22",
            "Possible edges between smokers and non smokers: 765 Actual edges between smokers and non smokers: 193 (25.23%)",
            "Average weight between smokers and not smokers 1.24",
        ],
    },
    SmokerSeasonSummary {
        season: 25,
        smokers: 38,
        non_smokers: 324,
        among_smokers: EdgeGroupStats {
            possible_edges: 703,
            actual_edges: 324,
            density_pct: 46.09,
            average_weight: 6.85,
        },
        among_non_smokers: EdgeGroupStats {
            possible_edges: 52326,
            actual_edges: 2154,
            density_pct: 4.12,
            average_weight: 3.88,
        },
        across_groups: EdgeGroupStats {
            possible_edges: 12312,
            actual_edges: 1749,
            density_pct: 14.21,
            average_weight: 5.35,
        },
        headline: "**Season 25 - Number of smokers: 38 & Number of not smokers: 324**",
        lines: &[
            "Possible edges between smokers: 703.0 Actual edges between smokers: 324. (46.09%)",
            "Average weight among smokers 6.85",
            "Possible edges between not smokers: 52326.0 Actual edges between not smokers: 2154. (4.12%)",
            "Average weight between not smokers 3.88",
            "Possible edges between smokers and non smokers: 12312 Actual edges between smokers and not smokers: 1749. (14.21%)",
            "average weight between smokers and not smokers 5.35",
        ],
    },
];

pub const INCLUSION_HEADING: &str = "Inclusion evolution";

pub const INCLUSION_FIRST_APPEARANCES: &str = "Analyzing the data on the first appearances and total appearances of **LGBT characters** across seasons, several patterns emerge. Initially, it's notable that there are instances of more first appearances of LGBT characters in **later seasons**. Also in the inaugural season, altough, this needs to be contextualized by considering the influx of new characters in the first season.";

pub const INCLUSION_TREND: &str = "Upon closer examination, of the second plot, it becomes evident that there is a **visual uptick in the frequency of total appearances of LGBT characters in later seasons** compared to earlier ones. There appears to be a discernible **trend towards an increased presence of LGBT characters** in later seasons, suggesting a potential awareness of the scriptwritters.";

pub const INCLUSION_IMAGE: ImageRef = ImageRef {
    file: "lgbtperseason.png",
    caption: "LGBT evolution",
};
