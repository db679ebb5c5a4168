//! NSQF (National Skills Qualifications Framework) level table
//!
//! Static source of salary ranges and job roles for levels 4-8, plus the
//! education and topic mappings built on top of it.

use serde::Serialize;

/// Level used when an education string has no mapping
pub const DEFAULT_NSQF_LEVEL: u8 = 6;

/// Highest level in the table
pub const MAX_NSQF_LEVEL: u8 = 8;

/// One NSQF level
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NsqfLevel {
    pub level: u8,
    pub title: &'static str,
    pub topics: &'static [&'static str],
    pub job_roles: &'static [&'static str],
    pub competencies: &'static [&'static str],
    /// Display range such as "₹5-10 LPA"
    pub salary_range: &'static str,
    pub skills: &'static [&'static str],
}

/// All NSQF levels in ascending order
pub static NSQF_LEVELS: &[NsqfLevel] = &[
    NsqfLevel {
        level: 4,
        title: "Certificate Level",
        topics: &[
            "Basic Programming Concepts",
            "Introduction to Data Analysis",
            "Computer Fundamentals",
            "Basic Statistics",
            "Excel for Data Analysis",
        ],
        job_roles: &[
            "Junior Data Entry Operator",
            "Computer Operator",
            "Basic Data Analyst",
            "IT Support Technician",
        ],
        competencies: &[
            "Basic computer literacy",
            "Data entry and validation",
            "Simple data visualization",
            "Basic problem-solving",
        ],
        salary_range: "₹2-4 LPA",
        skills: &[
            "MS Office Suite",
            "Basic SQL",
            "Data Cleaning",
            "Report Generation",
        ],
    },
    NsqfLevel {
        level: 5,
        title: "Diploma Level",
        topics: &[
            "Programming Fundamentals (Python/Java)",
            "Database Management",
            "Statistics and Probability",
            "Basic Machine Learning",
            "Data Visualization Tools",
        ],
        job_roles: &[
            "Data Analyst",
            "Junior Software Developer",
            "Database Administrator",
            "Business Intelligence Analyst",
        ],
        competencies: &[
            "Programming in at least one language",
            "Database design and querying",
            "Statistical analysis",
            "Data visualization and reporting",
        ],
        salary_range: "₹3-6 LPA",
        skills: &[
            "Python/Java Programming",
            "SQL and NoSQL Databases",
            "Tableau/Power BI",
            "Statistical Analysis",
        ],
    },
    NsqfLevel {
        level: 6,
        title: "Advanced Diploma/Bachelor's Level",
        topics: &[
            "Advanced Programming",
            "Machine Learning Algorithms",
            "Data Science Methodologies",
            "Web Development",
            "Cloud Computing Basics",
        ],
        job_roles: &[
            "Data Scientist",
            "Machine Learning Engineer",
            "Software Developer",
            "Systems Analyst",
            "Product Analyst",
        ],
        competencies: &[
            "Advanced programming skills",
            "Machine learning model development",
            "Statistical modeling",
            "Project management basics",
            "Technical communication",
        ],
        salary_range: "₹5-10 LPA",
        skills: &[
            "Python/R/Java",
            "Scikit-learn, Pandas",
            "AWS/Azure Basics",
            "Git Version Control",
            "Agile Methodologies",
        ],
    },
    NsqfLevel {
        level: 7,
        title: "Bachelor's Honors/Master's Level",
        topics: &[
            "Deep Learning",
            "Natural Language Processing",
            "Computer Vision",
            "Advanced Analytics",
            "MLOps and Deployment",
            "Big Data Technologies",
        ],
        job_roles: &[
            "Senior Data Scientist",
            "ML Research Engineer",
            "AI Solutions Architect",
            "Lead Data Engineer",
            "Technical Product Manager",
        ],
        competencies: &[
            "Advanced ML/DL model development",
            "Research and innovation",
            "Team leadership",
            "Architecture design",
            "Strategic thinking",
        ],
        salary_range: "₹8-18 LPA",
        skills: &[
            "TensorFlow/PyTorch",
            "Kubernetes/Docker",
            "Apache Spark/Hadoop",
            "Advanced Statistics",
            "Leadership Skills",
        ],
    },
    NsqfLevel {
        level: 8,
        title: "Master's/Research Level",
        topics: &[
            "AI Research Methodologies",
            "Advanced Deep Learning",
            "Reinforcement Learning",
            "AI Ethics and Governance",
            "Cutting-edge AI Applications",
            "Innovation Management",
        ],
        job_roles: &[
            "Principal Data Scientist",
            "AI Research Director",
            "Chief Technology Officer",
            "AI Consultant",
            "University Professor/Researcher",
        ],
        competencies: &[
            "Research leadership",
            "Strategic AI planning",
            "Innovation management",
            "Cross-functional collaboration",
            "Thought leadership",
        ],
        salary_range: "₹15-30+ LPA",
        skills: &[
            "Advanced Research Skills",
            "Publication and Patents",
            "Strategic Planning",
            "Team Management",
            "Industry Expertise",
        ],
    },
];

/// Education level to NSQF level
static EDUCATION_TO_NSQF: &[(&str, u8)] = &[
    ("High School", 4),
    ("Diploma", 5),
    ("Bachelor's", 6),
    ("Master's", 7),
    ("PhD", 8),
];

/// Topic to relevant NSQF levels
static TOPIC_TO_NSQF: &[(&str, &[u8])] = &[
    ("Basic Programming", &[4, 5]),
    ("Machine Learning", &[5, 6, 7]),
    ("Deep Learning", &[6, 7, 8]),
    ("Data Science", &[5, 6, 7]),
    ("Natural Language Processing", &[6, 7, 8]),
    ("Computer Vision", &[6, 7, 8]),
    ("AI Ethics", &[7, 8]),
    ("MLOps", &[6, 7, 8]),
    ("Robotics", &[7, 8]),
    ("Research Methods", &[7, 8]),
];

/// Get the table entry for a level
pub fn get_level(level: u8) -> Option<&'static NsqfLevel> {
    NSQF_LEVELS.iter().find(|l| l.level == level)
}

/// Map an education level to its NSQF level ([`DEFAULT_NSQF_LEVEL`] if unknown)
pub fn level_for_education(education: &str) -> u8 {
    EDUCATION_TO_NSQF
        .iter()
        .find(|(name, _)| *name == education)
        .map(|(_, level)| *level)
        .unwrap_or(DEFAULT_NSQF_LEVEL)
}

/// First level whose job roles contain `role`
pub fn level_for_role(role: &str) -> Option<u8> {
    NSQF_LEVELS
        .iter()
        .find(|l| l.job_roles.contains(&role))
        .map(|l| l.level)
}

/// Relevant levels for a topic, by case-insensitive partial match (`[6]` if none)
pub fn map_topic_to_levels(topic: &str) -> Vec<u8> {
    let topic = topic.to_lowercase();
    let mut levels: Vec<u8> = TOPIC_TO_NSQF
        .iter()
        .filter(|(key, _)| {
            let key = key.to_lowercase();
            key.contains(&topic) || topic.contains(&key)
        })
        .flat_map(|(_, levels)| levels.iter().copied())
        .collect();

    if levels.is_empty() {
        return vec![DEFAULT_NSQF_LEVEL];
    }
    levels.sort_unstable();
    levels.dedup();
    levels
}

/// Every job role across all levels, sorted and deduplicated
pub fn all_job_roles() -> Vec<&'static str> {
    let mut roles: Vec<&'static str> = NSQF_LEVELS
        .iter()
        .flat_map(|l| l.job_roles.iter().copied())
        .collect();
    roles.sort_unstable();
    roles.dedup();
    roles
}

/// Up to `count` levels above `current` that exist in the table
pub fn next_levels(current: u8, count: u8) -> Vec<u8> {
    let end = current.saturating_add(count).min(MAX_NSQF_LEVEL);
    (current.saturating_add(1)..=end)
        .filter(|level| get_level(*level).is_some())
        .collect()
}

/// Levels to pass through from the current level to a target role
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerPathway {
    pub current_level: u8,
    pub target_level: u8,
    pub target_role: String,
    pub progression: Vec<&'static NsqfLevel>,
}

/// Build the pathway towards `target_role`; unknown roles target the current level
pub fn career_pathway(current_level: u8, target_role: &str) -> CareerPathway {
    let target_level = level_for_role(target_role).unwrap_or(current_level);
    let progression = (current_level..=target_level.min(MAX_NSQF_LEVEL))
        .filter_map(get_level)
        .collect();

    CareerPathway {
        current_level,
        target_level,
        target_role: target_role.to_string(),
        progression,
    }
}
