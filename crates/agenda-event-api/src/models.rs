use agenda_event::model::datetime_minute;
use agenda_event::{Event, EventInput};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 字段名到约束提示的映射，作为 400 响应体返回
pub type Violations = BTreeMap<&'static str, &'static str>;

/// 活动写入请求
///
/// 创建与更新（PUT/PATCH）共用。所有字段可缺省，
/// 存在性与取值约束由 [`EventRequest::validate`] 在进入服务层之前检查。
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, with = "datetime_minute::option")]
    pub date: Option<NaiveDateTime>,
}

impl EventRequest {
    /// 校验请求字段，返回违反约束的字段及提示
    ///
    /// 空白检查先于长度检查，长度按字符计。
    pub fn validate(&self, now: NaiveDateTime) -> Violations {
        let mut violations = Violations::new();

        match self.name.as_deref() {
            None => {
                violations.insert("name", "Name cannot be blank");
            }
            Some(name) if name.trim().is_empty() => {
                violations.insert("name", "Name cannot be blank");
            }
            Some(name) => {
                let len = name.chars().count();
                if !(3..=50).contains(&len) {
                    violations.insert("name", "Name must be between 3 and 50 characters");
                }
            }
        }

        match self.description.as_deref() {
            None => {
                violations.insert("description", "Description cannot be blank");
            }
            Some(description) if description.trim().is_empty() => {
                violations.insert("description", "Description cannot be blank");
            }
            Some(description) => {
                let len = description.chars().count();
                if !(10..=200).contains(&len) {
                    violations.insert(
                        "description",
                        "Description must be between 10 and 200 characters",
                    );
                }
            }
        }

        match self.date {
            None => {
                violations.insert("date", "Date cannot be null");
            }
            Some(date) if date <= now => {
                violations.insert("date", "Date must be in the future");
            }
            Some(_) => {}
        }

        violations
    }
}

impl From<EventRequest> for EventInput {
    fn from(req: EventRequest) -> Self {
        EventInput {
            id: req.id,
            name: req.name,
            description: req.description,
            date: req.date,
        }
    }
}

/// 活动响应
#[derive(Debug, Serialize)]
pub struct EventResponse {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    #[serde(with = "datetime_minute::option")]
    pub date: Option<NaiveDateTime>,
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            name: event.name,
            description: event.description,
            date: event.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn valid_request() -> EventRequest {
        EventRequest {
            id: None,
            name: Some("Test Event".to_string()),
            description: Some("This is a test event".to_string()),
            date: NaiveDate::from_ymd_opt(2030, 1, 1)
                .unwrap()
                .and_hms_opt(10, 0, 0),
        }
    }

    #[test]
    fn test_valid_request_has_no_violations() {
        assert!(valid_request().validate(now()).is_empty());
    }

    #[test]
    fn test_name_length_boundaries() {
        let mut req = valid_request();
        req.name = Some("AB".to_string());
        assert_eq!(
            req.validate(now()).get("name"),
            Some(&"Name must be between 3 and 50 characters")
        );

        req.name = Some("ABC".to_string());
        assert!(req.validate(now()).is_empty());

        req.name = Some("A".repeat(51));
        assert_eq!(
            req.validate(now()).get("name"),
            Some(&"Name must be between 3 and 50 characters")
        );

        req.name = Some("A".repeat(50));
        assert!(req.validate(now()).is_empty());
    }

    #[test]
    fn test_blank_name_is_reported_before_length() {
        let mut req = valid_request();
        req.name = Some("            ".to_string());
        assert_eq!(req.validate(now()).get("name"), Some(&"Name cannot be blank"));

        req.name = None;
        assert_eq!(req.validate(now()).get("name"), Some(&"Name cannot be blank"));
    }

    #[test]
    fn test_description_constraints() {
        let mut req = valid_request();
        req.description = Some("Too short".to_string());
        assert_eq!(
            req.validate(now()).get("description"),
            Some(&"Description must be between 10 and 200 characters")
        );

        req.description = Some("Long enough".to_string());
        assert!(req.validate(now()).is_empty());

        req.description = Some("   ".to_string());
        assert_eq!(
            req.validate(now()).get("description"),
            Some(&"Description cannot be blank")
        );

        req.description = None;
        assert_eq!(
            req.validate(now()).get("description"),
            Some(&"Description cannot be blank")
        );
    }

    #[test]
    fn test_date_must_be_strictly_in_the_future() {
        let mut req = valid_request();

        // 等于当前时间不算未来
        req.date = Some(now());
        assert_eq!(
            req.validate(now()).get("date"),
            Some(&"Date must be in the future")
        );

        req.date = NaiveDate::from_ymd_opt(2020, 1, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0);
        assert_eq!(
            req.validate(now()).get("date"),
            Some(&"Date must be in the future")
        );

        req.date = None;
        assert_eq!(req.validate(now()).get("date"), Some(&"Date cannot be null"));
    }

    #[test]
    fn test_multiple_violations_are_collected() {
        let req = EventRequest {
            id: None,
            name: None,
            description: Some("Too short".to_string()),
            date: None,
        };

        let violations = req.validate(now());
        assert_eq!(violations.len(), 3);
        assert_eq!(violations.get("name"), Some(&"Name cannot be blank"));
        assert_eq!(
            violations.get("description"),
            Some(&"Description must be between 10 and 200 characters")
        );
        assert_eq!(violations.get("date"), Some(&"Date cannot be null"));
    }
}
