//! NSQF browsing commands

use careerpath::salary::nsqf;

pub fn levels_command() {
    for level in nsqf::NSQF_LEVELS {
        println!("Level {} - {} ({})", level.level, level.title, level.salary_range);
        println!("  Roles:  {}", level.job_roles.join(", "));
        println!("  Skills: {}", level.skills.join(", "));
        println!();
    }
}

pub fn pathway_command(education: &str, role: &str) {
    let current = nsqf::level_for_education(education);
    let pathway = nsqf::career_pathway(current, role);

    if nsqf::level_for_role(role).is_none() {
        println!("Unknown role {:?}; staying at level {}.", role, current);
    }

    println!(
        "Pathway from level {} to {} ({}):\n",
        pathway.current_level, pathway.target_level, pathway.target_role
    );
    for level in &pathway.progression {
        println!("  Level {} - {}", level.level, level.title);
        println!("    Topics:       {}", level.topics.join(", "));
        println!("    Competencies: {}", level.competencies.join(", "));
    }
}

pub fn topic_command(topic: &str) {
    let levels = nsqf::map_topic_to_levels(topic);
    let labels: Vec<String> = levels.iter().map(|l| l.to_string()).collect();
    println!("{}: NSQF levels {}", topic, labels.join(", "));
}

pub fn roles_command() {
    for role in nsqf::all_job_roles() {
        let level = nsqf::level_for_role(role).map(|l| l.to_string()).unwrap_or_default();
        println!("  {:<34} level {}", role, level);
    }
}
