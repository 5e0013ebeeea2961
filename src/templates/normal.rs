use super::{find_text, na, text_of};
use crate::models::JobRecord;
use crate::normalize::{parse_due_date, parse_experience, parse_salary};
use scraper::{Html, Selector};

/// Extracts a record from the plain "viec-lam" template.
///
/// The generic section values are positional: `[salary, city, experience]`.
/// The deadline marker holds an absolute `dd/mm/yyyy` date after a label.
pub fn extract(document: &Html, url: &str) -> JobRecord {
    let value_selector = Selector::parse("div.job-detail__info--section-content-value").unwrap();
    let title_selector = Selector::parse("h1.job-detail__info--title").unwrap();
    let company_selector = Selector::parse("h2.company-name-label").unwrap();
    let anchor_selector = Selector::parse("a").unwrap();
    let deadline_selector = Selector::parse("div.job-detail__info--deadline").unwrap();
    let jd_selector = Selector::parse("div.job-description__item--content").unwrap();

    let values: Vec<String> = document.select(&value_selector).map(text_of).collect();

    let company = document
        .select(&company_selector)
        .next()
        .and_then(|label| label.select(&anchor_selector).next())
        .map(text_of);

    let (salary_min, salary_max) = values
        .first()
        .map(|text| parse_salary(text))
        .unwrap_or((None, None));
    let (yrs_of_exp_min, yrs_of_exp_max) = values
        .get(2)
        .map(|text| parse_experience(text))
        .unwrap_or((None, None));

    JobRecord {
        job_id: job_id_from_url(url),
        job_title: find_text(document, &title_selector).unwrap_or_else(na),
        company: company.unwrap_or_else(na),
        salary_min,
        salary_max,
        yrs_of_exp_min,
        yrs_of_exp_max,
        job_city: values.get(1).cloned().unwrap_or_else(na),
        due_date: find_text(document, &deadline_selector)
            .as_deref()
            .and_then(parse_due_date),
        jd: find_text(document, &jd_selector).unwrap_or_else(na),
    }
}

/// Normal detail urls end in `<job-id>.html`; the id is the numeric prefix
/// of the last path segment. A malformed id is a soft failure.
fn job_id_from_url(url: &str) -> Option<i64> {
    url.rsplit('/').next()?.split('.').next()?.parse().ok()
}
