//! Static content shown by the portal screens.
//!
//! These tables are read-only inputs. Nothing in the portal validates or
//! mutates them; a real deployment would inject the same shapes from a
//! content source.

use crate::ids::MajorId;
use serde::Serialize;

/// A vocational major offered by the school.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Major {
    pub id: MajorId,
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub curriculum: &'static [&'static str],
    pub head_of_department: &'static str,
}

/// Well-known major ids.
pub mod majors {
    use super::MajorId;

    pub const SOFTWARE_ENGINEERING: MajorId = MajorId::from_u128(0x6d01);
    pub const NETWORK_ENGINEERING: MajorId = MajorId::from_u128(0x6d02);
    pub const MULTIMEDIA: MajorId = MajorId::from_u128(0x6d03);
    pub const ACCOUNTING: MajorId = MajorId::from_u128(0x6d04);
    pub const OFFICE_MANAGEMENT: MajorId = MajorId::from_u128(0x6d05);
    pub const AUTOMOTIVE: MajorId = MajorId::from_u128(0x6d06);
}

pub static MAJORS: [Major; 6] = [
    Major {
        id: majors::SOFTWARE_ENGINEERING,
        code: "RPL",
        name: "Software Engineering",
        description: "Focused on programming, software development, and database systems.",
        curriculum: &["Web Development", "Mobile Dev", "Java Programming", "Database Systems"],
        head_of_department: "Budi Santoso, M.Kom",
    },
    Major {
        id: majors::NETWORK_ENGINEERING,
        code: "TKJ",
        name: "Computer & Network Engineering",
        description: "Learn about server configuration, network infrastructure, and cybersecurity.",
        curriculum: &["Network Admin", "Cisco Systems", "Linux Server", "Cybersecurity"],
        head_of_department: "Dedi Kurniawan, S.T",
    },
    Major {
        id: majors::MULTIMEDIA,
        code: "MM",
        name: "Multimedia",
        description: "Visual communication design, video production, and 3D animation.",
        curriculum: &["Video Editing", "Photography", "UI/UX Design", "3D Modeling"],
        head_of_department: "Laras Ati, M.Ds",
    },
    Major {
        id: majors::ACCOUNTING,
        code: "AKL",
        name: "Accounting & Finance",
        description: "Financial management, taxation, and corporate auditing.",
        curriculum: &["Basic Accounting", "Financial Statements", "Tax Law", "MYOB"],
        head_of_department: "Siti Aminah, S.E",
    },
    Major {
        id: majors::OFFICE_MANAGEMENT,
        code: "OTKP",
        name: "Office Management",
        description: "Modern office administration and human resource management.",
        curriculum: &["Public Relations", "Document Control", "Business Corresp.", "HRM"],
        head_of_department: "Rina Wijaya, M.Pd",
    },
    Major {
        id: majors::AUTOMOTIVE,
        code: "TKRO",
        name: "Automotive Engineering",
        description: "Vehicle maintenance, engine repair, and automotive electronics.",
        curriculum: &["Engine Overhaul", "Chassis Repair", "Electrical Systems", "Auto EFI"],
        head_of_department: "Agus Salim, S.T",
    },
];

pub fn find_major(id: MajorId) -> Option<&'static Major> {
    MAJORS.iter().find(|major| major.id == id)
}

/// Major by its short code (`RPL`, `TKJ`, ...), case-insensitive.
pub fn find_major_by_code(code: &str) -> Option<&'static Major> {
    MAJORS
        .iter()
        .find(|major| major.code.eq_ignore_ascii_case(code.trim()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnnouncementCategory {
    Exam,
    Event,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Announcement {
    pub title: &'static str,
    pub content: &'static str,
    pub date: &'static str,
    pub category: AnnouncementCategory,
    pub author: &'static str,
}

pub static ANNOUNCEMENTS: [Announcement; 2] = [
    Announcement {
        title: "Mid-Term Exam Schedule Released",
        content: "The UTS for Semester 5 will be held from Oct 15 - Oct 22. Please download the schedule.",
        date: "2024-10-01",
        category: AnnouncementCategory::Exam,
        author: "Admin Kurikulum",
    },
    Announcement {
        title: "Career Fair 2024",
        content: "Join us next week for the annual Career Fair with 20+ industry partners.",
        date: "2024-10-05",
        category: AnnouncementCategory::Event,
        author: "Hubungan Industri",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentStatus {
    Pending,
    Submitted,
    Graded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub title: &'static str,
    pub subject: &'static str,
    pub due_date: &'static str,
    pub status: AssignmentStatus,
    pub score: Option<u8>,
}

pub static ASSIGNMENTS: [Assignment; 3] = [
    Assignment {
        title: "React State Management",
        subject: "Web Dev",
        due_date: "2024-10-10",
        status: AssignmentStatus::Pending,
        score: None,
    },
    Assignment {
        title: "Network Topology Design",
        subject: "Networking",
        due_date: "2024-10-12",
        status: AssignmentStatus::Submitted,
        score: None,
    },
    Assignment {
        title: "UI/UX Case Study",
        subject: "Multimedia",
        due_date: "2024-10-15",
        status: AssignmentStatus::Graded,
        score: Some(95),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExamStatus {
    Available,
    Upcoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Exam {
    pub subject: &'static str,
    pub time: &'static str,
    pub date: &'static str,
    pub status: ExamStatus,
}

pub static EXAMS: [Exam; 3] = [
    Exam {
        subject: "Adaptive Web Design",
        time: "08:00 - 10:00",
        date: "Dec 12, 2024",
        status: ExamStatus::Available,
    },
    Exam {
        subject: "Advanced Backend Systems",
        time: "10:30 - 12:30",
        date: "Dec 12, 2024",
        status: ExamStatus::Upcoming,
    },
    Exam {
        subject: "Cloud Infrastructure",
        time: "08:00 - 10:00",
        date: "Dec 13, 2024",
        status: ExamStatus::Upcoming,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Extracurricular {
    pub name: &'static str,
    pub members: u32,
}

pub static EXTRACURRICULARS: [Extracurricular; 4] = [
    Extracurricular {
        name: "Pramuka (Scouts)",
        members: 120,
    },
    Extracurricular {
        name: "Futsal & Basket",
        members: 85,
    },
    Extracurricular {
        name: "Robotics & Dev",
        members: 30,
    },
    Extracurricular {
        name: "Red Cross (PMR)",
        members: 55,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NotificationKind {
    Assignment,
    Exam,
    Attendance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
    pub kind: NotificationKind,
}

pub static NOTIFICATIONS: [Notification; 3] = [
    Notification {
        title: "New Assignment: Web Dev",
        description: "Teacher Anita uploaded a new task for React State Management.",
        time: "2 mins ago",
        kind: NotificationKind::Assignment,
    },
    Notification {
        title: "Exam Schedule Update",
        description: "The final semester exam for Multimedia has been moved to Dec 15.",
        time: "1 hour ago",
        kind: NotificationKind::Exam,
    },
    Notification {
        title: "Attendance Verified",
        description: "Your presence for Monday, 07 Oct has been successfully recorded.",
        time: "3 hours ago",
        kind: NotificationKind::Attendance,
    },
];

/// Share of school days per attendance outcome, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttendanceSummary {
    pub present: u8,
    pub late: u8,
    pub absent: u8,
}

pub static ATTENDANCE_SUMMARY: AttendanceSummary = AttendanceSummary {
    present: 92,
    late: 5,
    absent: 3,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PresenceStatus {
    InTime,
    Late,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PresenceRecord {
    pub date: &'static str,
    pub time: &'static str,
    pub status: PresenceStatus,
    pub location: &'static str,
}

pub static RECENT_PRESENCE: [PresenceRecord; 3] = [
    PresenceRecord {
        date: "Today, 07 Oct",
        time: "06:55 AM",
        status: PresenceStatus::InTime,
        location: "Gate A",
    },
    PresenceRecord {
        date: "Yesterday, 06 Oct",
        time: "07:02 AM",
        status: PresenceStatus::Late,
        location: "Gate B",
    },
    PresenceRecord {
        date: "Fri, 04 Oct",
        time: "06:48 AM",
        status: PresenceStatus::InTime,
        location: "Gate A",
    },
];
