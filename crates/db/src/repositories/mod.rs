//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod communication_repo;
pub mod daily_task_repo;
pub mod destination_repo;
pub mod employee_repo;
pub mod employer_repo;
pub mod family_member_repo;
pub mod finance_repo;
pub mod flight_repo;
pub mod hotel_repo;
pub mod meeting_repo;
pub mod passenger_repo;
pub mod private_jet_repo;
pub mod stakeholder_repo;
pub mod task_helper_repo;
pub mod trip_event_repo;
pub mod trip_repo;
pub mod visa_repo;

pub use communication_repo::CommunicationRepo;
pub use daily_task_repo::DailyTaskRepo;
pub use destination_repo::DestinationRepo;
pub use employee_repo::EmployeeRepo;
pub use employer_repo::EmployerRepo;
pub use family_member_repo::FamilyMemberRepo;
pub use finance_repo::{
    AssetRepo, DividendRepo, LiabilityRepo, MonthlyPaymentRepo, SalaryRepo,
};
pub use flight_repo::FlightRepo;
pub use hotel_repo::HotelRepo;
pub use meeting_repo::MeetingRepo;
pub use passenger_repo::PassengerRepo;
pub use private_jet_repo::PrivateJetRepo;
pub use stakeholder_repo::StakeholderRepo;
pub use task_helper_repo::TaskHelperRepo;
pub use trip_event_repo::TripEventRepo;
pub use trip_repo::TripRepo;
pub use visa_repo::VisaRepo;
