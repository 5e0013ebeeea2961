//! The "brand" family covers employer-branded detail pages. Two layouts
//! share the /brand/ keyword: the premium layout marks itself with a
//! `div#premium-job` marker, everything else is the diamond layout.

use super::{find_text, na, text_of};
use crate::models::JobRecord;
use crate::normalize::{parse_days_remaining, parse_due_date, parse_experience, parse_salary};
use chrono::NaiveDate;
use scraper::{Html, Selector};

/// Secondary in-page check that tells the two brand layouts apart.
pub fn is_premium(document: &Html) -> bool {
    let premium_selector = Selector::parse("div#premium-job").unwrap();
    document.select(&premium_selector).next().is_some()
}

/// Extracts a record from the diamond brand layout.
///
/// Fields nest two levels deep: the first "box-info" region holds the item
/// sub-regions (salary first, experience last), the second holds the job
/// description. The deadline is a days-remaining counter resolved against
/// `today`.
pub fn extract_diamond(document: &Html, url: &str, today: NaiveDate) -> JobRecord {
    let box_info_selector = Selector::parse("div.box-info").unwrap();
    let box_main_selector = Selector::parse("div.box-main").unwrap();
    let box_item_selector = Selector::parse("div.box-item").unwrap();
    let span_selector = Selector::parse("span").unwrap();
    let header_selector = Selector::parse("div.box-header").unwrap();
    let title_selector = Selector::parse("h2.title").unwrap();
    let company_selector = Selector::parse("div.footer-info-company-name").unwrap();
    let address_selector = Selector::parse("div.box-address").unwrap();
    let div_selector = Selector::parse("div").unwrap();
    let deadline_selector = Selector::parse("span.deadline").unwrap();
    let strong_selector = Selector::parse("strong").unwrap();
    let content_selector = Selector::parse("div.content-tab").unwrap();

    let box_infos: Vec<_> = document.select(&box_info_selector).take(2).collect();

    let items: Vec<_> = box_infos
        .first()
        .and_then(|info| info.select(&box_main_selector).next())
        .map(|main| main.select(&box_item_selector).collect())
        .unwrap_or_default();

    let salary_text = items
        .first()
        .and_then(|item| item.select(&span_selector).next())
        .map(text_of);
    let experience_text = items
        .last()
        .and_then(|item| item.select(&span_selector).next())
        .map(text_of);

    let (salary_min, salary_max) = salary_text
        .map(|text| parse_salary(&text))
        .unwrap_or((None, None));
    let (yrs_of_exp_min, yrs_of_exp_max) = experience_text
        .map(|text| parse_experience(&text))
        .unwrap_or((None, None));

    // The address line reads "<label>: <city>"; the city is whatever
    // follows the colon.
    let job_city = document
        .select(&address_selector)
        .next()
        .and_then(|address| address.select(&div_selector).next())
        .map(text_of)
        .filter(|text| text.contains(':'))
        .and_then(|text| {
            text.rsplit(':')
                .next()
                .map(|city| city.trim().to_string())
        })
        .unwrap_or_else(na);

    let due_date = document
        .select(&deadline_selector)
        .next()
        .and_then(|deadline| deadline.select(&strong_selector).next())
        .map(text_of)
        .and_then(|days| parse_days_remaining(&days, today));

    JobRecord {
        job_id: job_id_from_url(url),
        job_title: document
            .select(&header_selector)
            .next()
            .and_then(|header| header.select(&title_selector).next())
            .map(text_of)
            .unwrap_or_else(na),
        company: find_text(document, &company_selector).unwrap_or_else(na),
        salary_min,
        salary_max,
        yrs_of_exp_min,
        yrs_of_exp_max,
        job_city,
        due_date,
        jd: box_infos
            .get(1)
            .and_then(|info| info.select(&content_selector).next())
            .map(text_of)
            .unwrap_or_else(na),
    }
}

/// Extracts a record from the premium brand layout.
///
/// Field regions are a flat list: salary first, city second, experience
/// last. The deadline is an absolute date in the last of the general
/// information values.
pub fn extract_premium(document: &Html, url: &str) -> JobRecord {
    let value_selector = Selector::parse("div.basic-information-item__data--value").unwrap();
    let title_selector =
        Selector::parse("h2.premium-job-basic-information__content--title").unwrap();
    let company_selector = Selector::parse("h1.company-content__title--name").unwrap();
    let general_selector = Selector::parse("div.general-information-data__value").unwrap();
    let jd_selector = Selector::parse("div.premium-job-description__box--content").unwrap();

    let values: Vec<String> = document.select(&value_selector).map(text_of).collect();

    let (salary_min, salary_max) = values
        .first()
        .map(|text| parse_salary(text))
        .unwrap_or((None, None));
    let (yrs_of_exp_min, yrs_of_exp_max) = values
        .last()
        .map(|text| parse_experience(text))
        .unwrap_or((None, None));

    JobRecord {
        job_id: job_id_from_url(url),
        job_title: find_text(document, &title_selector).unwrap_or_else(na),
        company: find_text(document, &company_selector).unwrap_or_else(na),
        salary_min,
        salary_max,
        yrs_of_exp_min,
        yrs_of_exp_max,
        job_city: values.get(1).cloned().unwrap_or_else(na),
        due_date: document
            .select(&general_selector)
            .last()
            .map(text_of)
            .as_deref()
            .and_then(parse_due_date),
        jd: find_text(document, &jd_selector).unwrap_or_else(na),
    }
}

/// Brand urls end in `<slug>-p<job-id>.html`: the id is the last
/// hyphen-delimited token of the stem with its single leading non-digit
/// stripped. A malformed id is a soft failure.
fn job_id_from_url(url: &str) -> Option<i64> {
    let stem = url.rsplit('/').next()?.split('.').next()?;
    let token = stem.rsplit('-').next()?;
    let token = token
        .strip_prefix(|c: char| !c.is_ascii_digit())
        .unwrap_or(token);
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIAMOND_PAGE: &str = r#"
        <html><body>
          <div class="box-header"><h2 class="title">Kỹ sư dữ liệu</h2></div>
          <div class="box-info">
            <div class="box-main">
              <div class="box-item"><span>Trên 20 triệu</span></div>
              <div class="box-item"><span>Toàn thời gian</span></div>
              <div class="box-item"><span>Dưới 2 năm</span></div>
            </div>
          </div>
          <div class="box-info">
            <div class="content-tab">Xây dựng pipeline dữ liệu.</div>
          </div>
          <div class="box-address"><div>Khu vực: Đà Nẵng</div></div>
          <div class="footer-info-company-name">Công ty Diamond</div>
          <span class="deadline">Còn <strong>5</strong> ngày để ứng tuyển</span>
        </body></html>
    "#;

    const PREMIUM_PAGE: &str = r#"
        <html><body>
          <div id="premium-job"></div>
          <h2 class="premium-job-basic-information__content--title">Giám đốc kỹ thuật</h2>
          <h1 class="company-content__title--name">Công ty Premium</h1>
          <div class="basic-information-item__data--value">2,000 - 3,000 USD</div>
          <div class="basic-information-item__data--value">Hồ Chí Minh</div>
          <div class="basic-information-item__data--value">Trên 5 năm</div>
          <div class="general-information-data__value">Toàn thời gian</div>
          <div class="general-information-data__value">Hạn nộp: 15/01/2026</div>
          <div class="premium-job-description__box--content">Dẫn dắt đội ngũ kỹ thuật.</div>
        </body></html>
    "#;

    #[test]
    fn premium_marker_tells_the_layouts_apart() {
        assert!(is_premium(&Html::parse_document(PREMIUM_PAGE)));
        assert!(!is_premium(&Html::parse_document(DIAMOND_PAGE)));
    }

    #[test]
    fn diamond_extracts_nested_items_and_relative_deadline() {
        let document = Html::parse_document(DIAMOND_PAGE);
        let today = NaiveDate::from_ymd_opt(2025, 11, 7).unwrap();
        let record = extract_diamond(
            &document,
            "https://www.topcv.vn/brand/congty/tuyen-ky-su-p654321.html",
            today,
        );

        assert_eq!(record.job_id, Some(654321));
        assert_eq!(record.job_title, "Kỹ sư dữ liệu");
        assert_eq!(record.company, "Công ty Diamond");
        assert_eq!(record.salary_min, Some(20));
        assert_eq!(record.salary_max, None);
        assert_eq!(record.yrs_of_exp_min, None);
        assert_eq!(record.yrs_of_exp_max, Some(2));
        assert_eq!(record.job_city, "Đà Nẵng");
        assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2025, 11, 12));
        assert_eq!(record.jd, "Xây dựng pipeline dữ liệu.");
    }

    #[test]
    fn diamond_city_without_colon_is_not_available() {
        let document = Html::parse_document(
            r#"<div class="box-address"><div>Đà Nẵng</div></div>"#,
        );
        let today = NaiveDate::from_ymd_opt(2025, 11, 7).unwrap();
        let record = extract_diamond(&document, "https://x/brand/a-p1.html", today);
        assert_eq!(record.job_city, "N/A");
    }

    #[test]
    fn premium_extracts_flat_values_and_absolute_deadline() {
        let document = Html::parse_document(PREMIUM_PAGE);
        let record = extract_premium(
            &document,
            "https://www.topcv.vn/brand/congty/tuyen-giam-doc-p777888.html",
        );

        assert_eq!(record.job_id, Some(777888));
        assert_eq!(record.job_title, "Giám đốc kỹ thuật");
        assert_eq!(record.company, "Công ty Premium");
        // 2_000 * 24_000 / 1_000_000 = 48, 3_000 * 24_000 / 1_000_000 = 72
        assert_eq!(record.salary_min, Some(48));
        assert_eq!(record.salary_max, Some(72));
        assert_eq!(record.yrs_of_exp_min, Some(5));
        assert_eq!(record.yrs_of_exp_max, None);
        assert_eq!(record.job_city, "Hồ Chí Minh");
        assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2026, 1, 15));
        assert_eq!(record.jd, "Dẫn dắt đội ngũ kỹ thuật.");
    }

    #[test]
    fn empty_page_degrades_to_sentinels_for_both_layouts() {
        let document = Html::parse_document("<html><body></body></html>");
        let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        for record in [
            extract_diamond(&document, "https://x/brand/trang-trong", today),
            extract_premium(&document, "https://x/brand/trang-trong"),
        ] {
            assert_eq!(record.job_id, None);
            assert_eq!(record.job_title, "N/A");
            assert_eq!(record.company, "N/A");
            assert_eq!(record.salary_min, None);
            assert_eq!(record.salary_max, None);
            assert_eq!(record.yrs_of_exp_min, None);
            assert_eq!(record.yrs_of_exp_max, None);
            assert_eq!(record.job_city, "N/A");
            assert_eq!(record.due_date, None);
            assert_eq!(record.jd, "N/A");
        }
    }

    #[test]
    fn brand_job_id_strips_the_leading_marker_letter() {
        assert_eq!(
            job_id_from_url("https://www.topcv.vn/brand/abc/xin-chao-p123.html"),
            Some(123)
        );
        assert_eq!(job_id_from_url("https://www.topcv.vn/brand/abc/xin-chao.html"), None);
    }
}
