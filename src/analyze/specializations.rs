use crate::types::company::{CompanyRecord, WebsiteSignals};
use crate::types::scoring::Specialization;
use std::collections::BTreeSet;

const DIGITAL_MARKETING_SERVICES: [&str; 4] = ["SEO", "PPC", "Social Media", "Content"];

pub fn detect_specializations(
    company: &CompanyRecord,
    website: Option<&WebsiteSignals>,
) -> BTreeSet<Specialization> {
    let offers = |needle: &str| website.is_some_and(|website| website.mentions_service(needle));

    let mut detected = BTreeSet::new();
    if company.has_specialization("Digital Marketing")
        || DIGITAL_MARKETING_SERVICES.into_iter().any(|service| offers(service))
    {
        detected.insert(Specialization::DigitalMarketing);
    }
    if company.has_specialization("CRM") || offers("CRM") {
        detected.insert(Specialization::CrmImplementation);
    }
    if company.has_specialization("RevOps") || offers("Revenue Operations") {
        detected.insert(Specialization::RevOps);
    }
    detected
}
