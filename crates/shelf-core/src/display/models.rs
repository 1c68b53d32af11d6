//! Display implementations for domain models.
//!
//! Reserved records list the holder and date; anything short of a complete
//! holder prints [`NOT_RESERVED`].

use std::fmt;

use super::status::NOT_RESERVED;
use crate::models::{
    ActiveReservation, Book, BookDetail, Holder, Reservation, ReservationView, User,
};

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;
        writeln!(f, "- Author: {}", self.author)?;
        writeln!(f, "- ISBN: {}", self.isbn)?;
        writeln!(f, "- Status: {}", self.status)
    }
}

impl fmt::Display for ActiveReservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Reserved by: {} ({})", self.user_name, self.user_email)?;
        writeln!(f, "- Reservation Date: {}", self.reserved_on)
    }
}

impl fmt::Display for BookDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.book)?;
        match &self.reservation {
            Some(reservation) => write!(f, "{reservation}"),
            None => {
                writeln!(f)?;
                writeln!(f, "{NOT_RESERVED}")
            }
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **{}** (ID: {}): {}", self.name, self.id, self.email)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_unknown<T: fmt::Display>(value: Option<&T>) -> String {
            value.map_or_else(|| "unknown".to_string(), ToString::to_string)
        }

        writeln!(f, "- Reservation ID: {}", self.id)?;
        writeln!(f, "- Book ID: {}", or_unknown(self.book_id.as_ref()))?;
        writeln!(f, "- User ID: {}", or_unknown(self.user_id.as_ref()))?;
        writeln!(
            f,
            "- Reservation Date: {}",
            or_unknown(self.reservation_date.as_ref())
        )
    }
}

fn write_holder(f: &mut fmt::Formatter<'_>, holder: Option<&Holder>) -> fmt::Result {
    match holder {
        Some(holder) => writeln!(f, "- Reserved by: {} ({})", holder.name, holder.email),
        None => {
            writeln!(f)?;
            writeln!(f, "{NOT_RESERVED}")
        }
    }
}

impl fmt::Display for ReservationView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Reservation Status")?;
        writeln!(f)?;

        match self {
            Self::Book {
                book_id,
                status,
                reservation_date,
                holder,
            } => {
                writeln!(f, "- Book ID: {book_id}")?;
                writeln!(f, "- Status: {status}")?;
                if let Some(holder) = holder {
                    writeln!(f, "- Reserved by: {} ({})", holder.name, holder.email)?;
                    if let Some(date) = reservation_date {
                        writeln!(f, "- Reservation Date: {date}")?;
                    }
                    Ok(())
                } else {
                    write_holder(f, None)
                }
            }
            Self::User {
                user_id,
                title,
                status,
                reservation_date,
            } => {
                writeln!(f, "- User ID: {user_id}")?;
                writeln!(f, "- Book: {title}")?;
                writeln!(f, "- Status: {status}")?;
                match reservation_date {
                    Some(date) => writeln!(f, "- Reservation Date: {date}"),
                    None => writeln!(f, "- Reservation Date: unknown"),
                }
            }
            Self::Reservation {
                reservation_id,
                title,
                status,
                holder,
            } => {
                writeln!(f, "- Reservation ID: {reservation_id}")?;
                writeln!(f, "- Book: {title}")?;
                writeln!(f, "- Status: {status}")?;
                write_holder(f, holder.as_ref())
            }
            Self::Title {
                title,
                book_id,
                status,
                holder,
            } => {
                writeln!(f, "- Title: {title}")?;
                writeln!(f, "- Book ID: {book_id}")?;
                writeln!(f, "- Status: {status}")?;
                write_holder(f, holder.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn sample_book() -> Book {
        Book {
            id: 7,
            title: "Moby Dick".to_string(),
            author: "Herman Melville".to_string(),
            isbn: "978-0142437247".to_string(),
            status: "reserved".to_string(),
        }
    }

    fn ada() -> Holder {
        Holder {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        }
    }

    #[test]
    fn test_book_detail_reserved() {
        let detail = BookDetail {
            book: sample_book(),
            reservation: Some(ActiveReservation {
                user_name: "Ada".to_string(),
                user_email: "ada@example.com".to_string(),
                reserved_on: date(2024, 3, 1),
            }),
        };

        let output = detail.to_string();
        assert!(output.starts_with("# 7. Moby Dick\n"));
        assert!(output.contains("- Author: Herman Melville"));
        assert!(output.contains("- ISBN: 978-0142437247"));
        assert!(output.contains("- Reserved by: Ada (ada@example.com)"));
        assert!(output.contains("- Reservation Date: 2024-03-01"));
        assert!(!output.contains(NOT_RESERVED));
    }

    #[test]
    fn test_book_detail_not_reserved() {
        let detail = BookDetail {
            book: sample_book(),
            reservation: None,
        };

        let output = detail.to_string();
        assert!(output.contains("- Status: reserved"));
        assert!(output.ends_with("Not reserved by anyone.\n"));
    }

    #[test]
    fn test_view_by_book() {
        let view = ReservationView::Book {
            book_id: 7,
            status: "reserved".to_string(),
            reservation_date: Some(date(2024, 3, 1)),
            holder: Some(ada()),
        };

        let output = view.to_string();
        assert!(output.starts_with("## Reservation Status\n"));
        assert!(output.contains("- Book ID: 7"));
        assert!(output.contains("- Reserved by: Ada (ada@example.com)"));
        assert!(output.contains("- Reservation Date: 2024-03-01"));
    }

    #[test]
    fn test_view_by_user() {
        let view = ReservationView::User {
            user_id: 3,
            title: "Emma".to_string(),
            status: "reserved".to_string(),
            reservation_date: None,
        };

        let output = view.to_string();
        assert!(output.contains("- User ID: 3"));
        assert!(output.contains("- Book: Emma"));
        assert!(output.contains("- Reservation Date: unknown"));
    }

    #[test]
    fn test_view_by_title_unreserved() {
        let view = ReservationView::Title {
            title: "Emma".to_string(),
            book_id: 2,
            status: "available".to_string(),
            holder: None,
        };

        let output = view.to_string();
        assert!(output.contains("- Title: Emma"));
        assert!(output.contains("- Book ID: 2"));
        assert!(output.contains(NOT_RESERVED));
    }

    #[test]
    fn test_view_by_reservation() {
        let view = ReservationView::Reservation {
            reservation_id: 5,
            title: "Emma".to_string(),
            status: "reserved".to_string(),
            holder: Some(ada()),
        };

        let output = view.to_string();
        assert!(output.contains("- Reservation ID: 5"));
        assert!(output.contains("- Reserved by: Ada"));
    }

    #[test]
    fn test_reservation_with_missing_fields() {
        let reservation = Reservation {
            id: 4,
            book_id: Some(1),
            user_id: None,
            reservation_date: None,
        };

        let output = reservation.to_string();
        assert!(output.contains("- Book ID: 1"));
        assert!(output.contains("- User ID: unknown"));
        assert!(output.contains("- Reservation Date: unknown"));
    }

    #[test]
    fn test_user_display() {
        let user = User {
            id: 3,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(user.to_string(), "- **Ada** (ID: 3): ada@example.com\n");
    }
}
