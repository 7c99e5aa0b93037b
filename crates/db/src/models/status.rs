//! Status helper enums mapping to SMALLSERIAL/SMALLINT lookup tables.
//!
//! Each enum variant's discriminant matches the seed data order (1-based)
//! in the corresponding `*_statuses` database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Trip lifecycle status.
    TripStatus {
        Request = 1,
        Planning = 2,
        Confirming = 3,
        Executing = 4,
        Completed = 5,
        Cancelled = 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trip_status_ids_match_seed_order() {
        assert_eq!(TripStatus::Request.id(), 1);
        assert_eq!(TripStatus::Planning.id(), 2);
        assert_eq!(TripStatus::Confirming.id(), 3);
        assert_eq!(TripStatus::Executing.id(), 4);
        assert_eq!(TripStatus::Completed.id(), 5);
        assert_eq!(TripStatus::Cancelled.id(), 6);
    }
}
