use crate::analyze::recommend::EXCELLENT_MATCH;
use crate::types::report::Analysis;
use crate::types::scoring::Category;

pub fn to_markdown(analyses: &[&Analysis]) -> String {
    let mut output = String::new();
    output.push_str("# Partner Fit Analysis\n");
    if analyses.is_empty() {
        output.push_str("\n- none\n");
        return output;
    }
    for analysis in analyses {
        output.push('\n');
        push_analysis(&mut output, analysis);
    }
    output
}

fn push_analysis(output: &mut String, analysis: &Analysis) {
    let company = &analysis.company;
    let score = &analysis.score;

    output.push_str(&format!(
        "## {} - {:.1}% Match\n\n",
        company.name, score.overall_match
    ));
    output.push_str(&format!("Overall IPP match: {:.1}%\n\n", score.overall_match));

    output.push_str("### Category Scores\n\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "- {}: {:.1}% ({}/{})\n",
            category,
            score.percentage(category),
            score.points(category),
            crate::rubric::max_points(category)
        ));
    }
    output.push('\n');

    output.push_str("### Company Details\n\n");
    output.push_str(&format!("- Employees: {}\n", company.employees));
    output.push_str(&format!("- Website: {}\n", company.website));
    output.push_str(&format!("- Location: {}\n", company.location));
    output.push_str(&format!(
        "- Specializations: {}\n\n",
        company.specializations.join(", ")
    ));

    if let Some(social) = &analysis.social {
        output.push_str("### Social Insights\n\n");
        output.push_str(&format!("- Followers: {}\n", social.follower_count));
        output.push_str(&format!("- Employee count: {}\n", social.employee_count));
        output.push_str(&format!(
            "- Enterprise clients: {}\n",
            social.enterprise_clients.join(", ")
        ));
        output.push_str("- Key executives:\n");
        for executive in &social.key_executives {
            output.push_str(&format!("  - {} ({})\n", executive.name, executive.title));
        }
        output.push('\n');
    }

    output.push_str("### Website Analysis\n\n");
    match &analysis.website {
        Some(website) => {
            output.push_str(&format!(
                "- Technologies: {}\n",
                website.technologies.join(", ")
            ));
            output.push_str(&format!("- Services: {}\n", website.services.join(", ")));
            output.push_str(&format!(
                "- Target industries: {}\n",
                website.target_industries.join(", ")
            ));
            output.push_str(&format!("- Case studies: {}\n\n", website.case_studies));
        }
        None => output.push_str("- unavailable\n\n"),
    }

    output.push_str("### Recommendations\n\n");
    if analysis.recommendations.is_empty() {
        output.push_str(&format!("{EXCELLENT_MATCH}\n"));
    } else {
        for recommendation in &analysis.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
    }
}
