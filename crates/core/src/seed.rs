//! Compiled-in demo data
//!
//! Everything the Mini App shows comes from here; there is no backend.

use chrono::{NaiveDate, NaiveTime};

use crate::models::{
    Meeting, MeetingStatus, Office, OfficePlan, Project, ProjectStatus, Role, User,
};
use crate::types::{MeetingId, OfficeId, ProjectId, UserId};

/// Telegram id of the seeded director
pub const DIRECTOR_ID: UserId = UserId(123456789);

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn person(
    id: i64,
    first_name: &str,
    last_name: &str,
    username: &str,
    photo: &str,
    phone: &str,
    role: Role,
) -> User {
    User {
        id: UserId(id),
        first_name: first_name.to_string(),
        last_name: Some(last_name.to_string()),
        username: Some(username.to_string()),
        photo_url: Some(format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=150&h=150&fit=crop"
        )),
        phone: Some(phone.to_string()),
        role,
        is_registered: true,
    }
}

/// The registered director
pub fn director() -> User {
    person(
        DIRECTOR_ID.0,
        "Иван",
        "Петров",
        "ivan_petrov",
        "2379004",
        "+7 (999) 123-45-67",
        Role::Director,
    )
}

/// Employee directory
pub fn employees() -> Vec<User> {
    vec![
        person(
            987654321,
            "Анна",
            "Смирнова",
            "anna_smirnova",
            "3307758",
            "+7 (999) 234-56-78",
            Role::Employee,
        ),
        person(
            555666777,
            "Михаил",
            "Козлов",
            "mikhail_kozlov",
            "3781104",
            "+7 (999) 345-67-89",
            Role::Employee,
        ),
        person(
            111222333,
            "Елена",
            "Волкова",
            "elena_volkova",
            "4307869",
            "+7 (999) 456-78-90",
            Role::Employee,
        ),
    ]
}

/// Everyone the host bootstrap treats as already registered
pub fn registered_users() -> Vec<User> {
    std::iter::once(director()).chain(employees()).collect()
}

fn office(id: &str, name: &str, color: &str, address: &str) -> Office {
    Office {
        id: OfficeId::from(id),
        name: name.to_string(),
        color: color.to_string(),
        address: address.to_string(),
    }
}

pub fn offices() -> Vec<Office> {
    vec![
        office("office-1", "Москва Центр", "#007AFF", "ул. Тверская, 10"),
        office(
            "office-2",
            "Москва Сити",
            "#34C759",
            "Москва-Сити, башня Федерация",
        ),
        office("office-3", "СПБ Офис", "#FF9500", "Невский проспект, 25"),
        office(OfficeId::REMOTE, "Удаленно", "#8E8E93", "Дистанционная работа"),
    ]
}

pub fn office_plans() -> Vec<OfficePlan> {
    let plan = |day: u32, office: Option<&str>| {
        OfficePlan::new(date(2025, 1, day), office.map(OfficeId::from), DIRECTOR_ID)
    };
    vec![
        plan(15, Some("office-1")),
        plan(16, Some("office-2")),
        plan(17, None),
        plan(18, Some(OfficeId::REMOTE)),
        plan(19, Some("office-1")),
    ]
}

pub fn projects() -> Vec<Project> {
    let team = employees();
    let with_director = |others: &[User]| {
        std::iter::once(director())
            .chain(others.iter().cloned())
            .collect::<Vec<_>>()
    };

    vec![
        Project {
            id: ProjectId::from("project-1"),
            name: "Мобильное приложение".to_string(),
            description: "Разработка корпоративного мобильного приложения для сотрудников"
                .to_string(),
            deadline: date(2025, 3, 15),
            participants: with_director(&team[0..2]),
            progress: 65,
            status: ProjectStatus::Active,
        },
        Project {
            id: ProjectId::from("project-2"),
            name: "Обновление сайта".to_string(),
            description: "Редизайн и техническое обновление корпоративного веб-сайта".to_string(),
            deadline: date(2025, 2, 28),
            participants: with_director(&team[1..3]),
            progress: 40,
            status: ProjectStatus::Active,
        },
        Project {
            id: ProjectId::from("project-3"),
            name: "CRM система".to_string(),
            description: "Внедрение новой CRM системы для управления клиентами".to_string(),
            deadline: date(2025, 4, 30),
            participants: with_director(&team[..]),
            progress: 25,
            status: ProjectStatus::Active,
        },
    ]
}

pub fn meetings() -> Vec<Meeting> {
    let team = employees();
    let with_director = |others: &[User]| {
        std::iter::once(director())
            .chain(others.iter().cloned())
            .collect::<Vec<_>>()
    };

    vec![
        Meeting {
            id: MeetingId::from("meeting-1"),
            title: "Планерка по проекту".to_string(),
            description: Some("Обсуждение текущего прогресса по мобильному приложению".to_string()),
            date: date(2025, 1, 20),
            time: time(10, 0),
            duration: 60,
            participants: with_director(&team[0..2]),
            project_id: Some(ProjectId::from("project-1")),
            created_by: DIRECTOR_ID,
            status: MeetingStatus::Scheduled,
        },
        Meeting {
            id: MeetingId::from("meeting-2"),
            title: "Демо версии сайта".to_string(),
            description: Some("Показ промежуточных результатов работы над сайтом".to_string()),
            date: date(2025, 1, 18),
            time: time(14, 0),
            duration: 90,
            participants: with_director(&team[1..3]),
            project_id: Some(ProjectId::from("project-2")),
            created_by: DIRECTOR_ID,
            status: MeetingStatus::Completed,
        },
        Meeting {
            id: MeetingId::from("meeting-3"),
            title: "Интервью с кандидатом".to_string(),
            description: Some("Собеседование с потенциальным новым сотрудником".to_string()),
            date: date(2025, 1, 22),
            time: time(15, 30),
            duration: 45,
            participants: with_director(&team[0..1]),
            project_id: None,
            created_by: DIRECTOR_ID,
            status: MeetingStatus::Scheduled,
        },
    ]
}
