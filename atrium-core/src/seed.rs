//! Idempotent startup seeding.
//!
//! Each collection is seeded only when it is empty, so a redeploy against
//! an existing database changes nothing.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::admin;
use crate::error::StoreResult;
use crate::registry::ResourceKind;
use crate::repository::Repository;
use crate::store::{Document, DocumentStore, Query};

fn doc(value: serde_json::Value) -> Document {
    value.as_object().cloned().unwrap_or_default()
}

/// Seed the default admin and sample content.
pub async fn initialize_database(
    store: &Arc<dyn DocumentStore>,
    admin_username: &str,
    admin_password: &str,
) -> StoreResult<()> {
    if !admin::admin_exists(store, admin_username).await? {
        admin::create_admin(store, admin_username, admin_password).await?;
        info!("default admin created");
    }

    seed_collection(store, ResourceKind::Program, sample_programs()).await?;
    seed_collection(store, ResourceKind::News, sample_news()).await?;
    seed_collection(store, ResourceKind::Partnership, sample_partnerships())
        .await?;
    seed_collection(store, ResourceKind::TeamMember, sample_team()).await?;
    seed_collection(store, ResourceKind::Event, sample_events()).await?;
    seed_collection(store, ResourceKind::Faq, sample_faqs()).await?;
    seed_collection(store, ResourceKind::StaticContent, sample_static())
        .await?;

    info!("database initialization complete");
    Ok(())
}

async fn seed_collection(
    store: &Arc<dyn DocumentStore>,
    kind: ResourceKind,
    samples: Vec<Document>,
) -> StoreResult<()> {
    let spec = kind.spec();
    if store.count(spec.collection, &Query::new()).await? > 0 {
        return Ok(());
    }
    let repo = Repository::new(store.clone(), spec);
    let count = samples.len();
    for sample in samples {
        repo.create(sample).await?;
    }
    info!(collection = spec.collection, count, "seeded collection");
    Ok(())
}

fn sample_programs() -> Vec<Document> {
    vec![
        doc(json!({
            "title": "Engineering Innovation - Stanford University",
            "description": "Advanced engineering program focusing on Silicon Valley innovation, startup methodologies, and cutting-edge technology development with hands-on industry exposure.",
            "partnerUniversity": "Stanford University, USA",
            "duration": "1 Semester (5 months)",
            "eligibility": "3rd/4th year Engineering students with CGPA >= 8.0",
            "deadline": "January 20, 2025",
            "applicationLink": "https://forms.google.com/stanford-engineering",
            "status": "Active"
        })),
        doc(json!({
            "title": "International Business - London School of Economics",
            "description": "Global business strategy program offering deep insights into international markets, finance, and economic policy.",
            "partnerUniversity": "London School of Economics, UK",
            "duration": "6 months",
            "eligibility": "MBA/BBA students with minimum 80% marks",
            "deadline": "March 10, 2025",
            "applicationLink": "https://forms.google.com/lse-business",
            "status": "Active"
        })),
        doc(json!({
            "title": "Computer Science & AI - ETH Zurich",
            "description": "World-class computer science program specializing in artificial intelligence, machine learning, and quantum computing.",
            "partnerUniversity": "ETH Zurich, Switzerland",
            "duration": "1 Academic Year",
            "eligibility": "CS/IT students with CGPA >= 8.5 and research experience",
            "deadline": "December 30, 2024",
            "applicationLink": "https://forms.google.com/eth-cs",
            "status": "Active"
        })),
    ]
}

fn sample_news() -> Vec<Document> {
    vec![
        doc(json!({
            "title": "New MoU Signed with Harvard University",
            "content": "The Office of International Affairs is proud to announce a new Memorandum of Understanding with Harvard University for collaborative research and student exchange programs.",
            "category": "MoU",
            "date": "2025-12-01T00:00:00Z",
            "author": "OIA Team",
            "tags": ["partnership", "harvard", "mou"],
            "featured": true
        })),
        doc(json!({
            "title": "Students Win International Innovation Award",
            "content": "Three students have won the prestigious Global Innovation Challenge in Berlin, competing against 200+ teams from 50 countries.",
            "category": "Achievement",
            "date": "2025-11-15T00:00:00Z",
            "author": "OIA Team",
            "tags": ["achievement", "students", "innovation"],
            "featured": true
        })),
        doc(json!({
            "title": "New Scholarship Program for International Students",
            "content": "Announcing a new scholarship program covering 50% tuition for exceptional international students. Applications open from January 2025.",
            "category": "Announcement",
            "date": "2025-09-05T00:00:00Z",
            "author": "OIA Team",
            "tags": ["scholarship", "admissions"],
            "featured": true
        })),
    ]
}

fn sample_partnerships() -> Vec<Document> {
    vec![
        doc(json!({
            "partnerName": "Massachusetts Institute of Technology (MIT)",
            "type": "Research",
            "country": "United States",
            "details": "Collaborative research in AI, robotics, and sustainable technology. Joint PhD programs available.",
            "status": "Active",
            "signedDate": "2023-05-15T00:00:00Z",
            "website": "https://www.mit.edu",
            "benefits": ["Research collaboration", "Student exchange", "Faculty visits"]
        })),
        doc(json!({
            "partnerName": "University of Oxford",
            "type": "Dual Degree",
            "country": "United Kingdom",
            "details": "Dual degree programs in Medicine and Life Sciences with full credit transfer.",
            "status": "Active",
            "signedDate": "2022-09-20T00:00:00Z",
            "website": "https://www.ox.ac.uk",
            "benefits": ["Dual degrees", "Research opportunities", "Scholarships"]
        })),
        doc(json!({
            "partnerName": "National University of Singapore",
            "type": "Student Exchange",
            "country": "Singapore",
            "details": "Semester exchange programs for engineering and business students.",
            "status": "Active",
            "signedDate": "2024-02-10T00:00:00Z",
            "website": "https://www.nus.edu.sg",
            "benefits": ["Semester exchange", "Cultural immersion", "Industry exposure"]
        })),
    ]
}

fn sample_team() -> Vec<Document> {
    vec![
        doc(json!({
            "name": "Dr. Rajesh Kumar",
            "role": "Director, Office of International Affairs",
            "bio": "Dr. Kumar has over 20 years of experience in international education and has established partnerships with 50+ universities worldwide.",
            "email": "rajesh.kumar@example.ac.in",
            "phone": "+91-731-1234567",
            "office": "Admin Block, Room 301",
            "responsibilities": ["Strategic partnerships", "Policy development", "International collaborations"],
            "order": 1
        })),
        doc(json!({
            "name": "Prof. Priya Sharma",
            "role": "Associate Director, Student Mobility",
            "bio": "Prof. Sharma specializes in student exchange programs and has coordinated mobility for over 500 students.",
            "email": "priya.sharma@example.ac.in",
            "phone": "+91-731-1234568",
            "office": "Admin Block, Room 302",
            "responsibilities": ["Student exchanges", "Program coordination", "Student counseling"],
            "order": 2
        })),
        doc(json!({
            "name": "Mr. Anil Verma",
            "role": "Manager, International Admissions",
            "bio": "Mr. Verma handles all international admissions and visa support services.",
            "email": "anil.verma@example.ac.in",
            "phone": "+91-731-1234569",
            "office": "Admin Block, Room 305",
            "responsibilities": ["Admissions processing", "Visa assistance", "Documentation"],
            "order": 3
        })),
    ]
}

fn sample_events() -> Vec<Document> {
    vec![
        doc(json!({
            "title": "International Education Fair 2025",
            "type": "Conference",
            "description": "Annual education fair featuring representatives from 30+ international universities.",
            "startDate": "2025-03-15T10:00:00Z",
            "endDate": "2025-03-15T17:00:00Z",
            "venue": "Main Auditorium",
            "organizer": "Office of International Affairs",
            "participants": ["Harvard", "MIT", "Oxford", "Cambridge"],
            "featured": true
        })),
        doc(json!({
            "title": "Global Research Collaboration Webinar",
            "type": "Webinar",
            "description": "Webinar on establishing international research partnerships and funding opportunities.",
            "startDate": "2025-02-20T15:00:00Z",
            "endDate": "2025-02-20T17:00:00Z",
            "venue": "Online (Zoom)",
            "organizer": "Dr. Rajesh Kumar",
            "featured": true,
            "registrationLink": "https://zoom.us/webinar/register"
        })),
        doc(json!({
            "title": "Study Abroad Orientation Session",
            "type": "Seminar",
            "description": "Comprehensive orientation for students planning to study abroad in Fall 2025.",
            "startDate": "2025-01-25T14:00:00Z",
            "endDate": "2025-01-25T16:00:00Z",
            "venue": "Seminar Hall A",
            "organizer": "Student Mobility Office",
            "featured": false
        })),
    ]
}

fn sample_faqs() -> Vec<Document> {
    vec![
        doc(json!({
            "question": "How do I apply for student exchange programs?",
            "answer": "To apply for student exchange programs, visit the Student Mobility section, select your desired program, and fill out the online application form.",
            "category": "Mobility",
            "order": 1,
            "featured": true
        })),
        doc(json!({
            "question": "What are the admission requirements for international students?",
            "answer": "International students must have completed the equivalent of 12 years of schooling, meet English proficiency requirements, and submit transcripts and a passport copy.",
            "category": "Admissions",
            "order": 2,
            "featured": true
        })),
        doc(json!({
            "question": "What scholarship opportunities are available?",
            "answer": "We offer merit-based scholarships covering 25-50% of tuition fees for exceptional students, alongside country-specific and government-funded programs.",
            "category": "Admissions",
            "order": 3,
            "featured": false
        })),
    ]
}

fn sample_static() -> Vec<Document> {
    vec![
        doc(json!({
            "key": "vision_mission",
            "title": "Vision & Mission",
            "content": "# Our Vision\nTo be a globally recognized institution fostering international collaboration, cultural diversity, and academic excellence.\n\n# Our Mission\n- Promote student and faculty mobility through strategic partnerships\n- Facilitate research collaboration with leading international institutions\n- Provide comprehensive support to international students and scholars",
            "section": "about"
        })),
        doc(json!({
            "key": "policies",
            "title": "International Policies & Guidelines",
            "content": "# Credit Transfer Policy\nAll partner universities follow ECTS with 1:1 credit mapping. Students must complete a minimum of 12 credits per semester abroad.\n\n# Visa Policy\nStudent visa applications must be submitted 6 weeks before the program start.",
            "section": "about"
        })),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        initialize_database(&store, "admin", "pw").await.unwrap();
        let programs = store.count("programs", &Query::new()).await.unwrap();
        assert_eq!(programs, 3);

        initialize_database(&store, "admin", "pw").await.unwrap();
        assert_eq!(
            store.count("programs", &Query::new()).await.unwrap(),
            programs
        );
        assert_eq!(store.count("admins", &Query::new()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn seeded_program_is_searchable() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        initialize_database(&store, "admin", "pw").await.unwrap();
        let response = crate::search::global_search(&store, "zurich", None)
            .await
            .unwrap();
        assert_eq!(response.total, 1);
        assert_eq!(response.results[0].kind, "program");
    }
}
