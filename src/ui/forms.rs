//! Per-action field collection. Each form gathers its fields as raw strings
//! in prompt order and performs the only client-side coercion in a separate
//! `parse_inputs` step: integer ids, the publish date, and the role
//! enumeration. Everything else is passed through trimmed, leaving real
//! validation to the database routines.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use super::helpers::prompt_line;
use crate::models::{NewBook, NewUser, Role};

/// Format accepted for the book publish date.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw fields for the "add new user" action.
#[derive(Debug, Default, Clone)]
pub(crate) struct UserForm {
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) email: String,
    pub(crate) password: String,
    pub(crate) role: String,
}

impl UserForm {
    /// Collect all five fields in the order the insert routine expects them.
    pub(crate) fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        Ok(Self {
            first_name: prompt_line(input, output, "First Name: ")?,
            last_name: prompt_line(input, output, "Last Name: ")?,
            email: prompt_line(input, output, "Email: ")?,
            password: prompt_line(input, output, "Password: ")?,
            role: prompt_line(input, output, "Role (member/admin): ")?,
        })
    }

    /// Coerce the role and return typed values ready for persistence.
    pub(crate) fn parse_inputs(&self) -> Result<NewUser> {
        let role = self.role.parse::<Role>().map_err(anyhow::Error::from)?;
        Ok(NewUser {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.trim().to_string(),
            role,
        })
    }
}

/// Raw fields for the "add new book" action.
#[derive(Debug, Default, Clone)]
pub(crate) struct BookForm {
    pub(crate) title: String,
    pub(crate) summary: String,
    pub(crate) publish_date: String,
    pub(crate) author_id: String,
    pub(crate) publisher_id: String,
    pub(crate) category_id: String,
}

impl BookForm {
    /// Collect all six fields in the order the insert routine expects them.
    pub(crate) fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        Ok(Self {
            title: prompt_line(input, output, "Book Title: ")?,
            summary: prompt_line(input, output, "Summary: ")?,
            publish_date: prompt_line(input, output, "Publish Date (YYYY-MM-DD): ")?,
            author_id: prompt_line(input, output, "Author ID: ")?,
            publisher_id: prompt_line(input, output, "Publisher ID: ")?,
            category_id: prompt_line(input, output, "Category ID: ")?,
        })
    }

    /// Coerce the date and the three ids into their typed forms.
    pub(crate) fn parse_inputs(&self) -> Result<NewBook> {
        let publish_date = NaiveDate::parse_from_str(self.publish_date.trim(), DATE_FORMAT)
            .context("Publish date must look like YYYY-MM-DD.")?;
        let author_id = self
            .author_id
            .trim()
            .parse::<i32>()
            .context("Author ID must be an integer.")?;
        let publisher_id = self
            .publisher_id
            .trim()
            .parse::<i32>()
            .context("Publisher ID must be an integer.")?;
        let category_id = self
            .category_id
            .trim()
            .parse::<i32>()
            .context("Category ID must be an integer.")?;

        Ok(NewBook {
            title: self.title.trim().to_string(),
            summary: self.summary.trim().to_string(),
            publish_date,
            author_id,
            publisher_id,
            category_id,
        })
    }
}

/// Raw fields for the "add club membership" action.
#[derive(Debug, Default, Clone)]
pub(crate) struct MembershipForm {
    pub(crate) club_id: String,
    pub(crate) user_id: String,
}

impl MembershipForm {
    pub(crate) fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        Ok(Self {
            club_id: prompt_line(input, output, "Club ID: ")?,
            user_id: prompt_line(input, output, "User ID: ")?,
        })
    }

    /// Coerce both ids, club first to match the routine's parameter order.
    pub(crate) fn parse_inputs(&self) -> Result<(i32, i32)> {
        let club_id = self
            .club_id
            .trim()
            .parse::<i32>()
            .context("Club ID must be an integer.")?;
        let user_id = self
            .user_id
            .trim()
            .parse::<i32>()
            .context("User ID must be an integer.")?;
        Ok((club_id, user_id))
    }
}

/// Raw fields for the "update user" action.
#[derive(Debug, Default, Clone)]
pub(crate) struct UserUpdateForm {
    pub(crate) user_id: String,
    pub(crate) email: String,
    pub(crate) role: String,
}

impl UserUpdateForm {
    pub(crate) fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        Ok(Self {
            user_id: prompt_line(input, output, "Enter the User ID to update: ")?,
            email: prompt_line(input, output, "New Email: ")?,
            role: prompt_line(input, output, "New Role (member/admin): ")?,
        })
    }

    pub(crate) fn parse_inputs(&self) -> Result<(i32, String, Role)> {
        let user_id = self
            .user_id
            .trim()
            .parse::<i32>()
            .context("User ID must be an integer.")?;
        let role = self.role.parse::<Role>().map_err(anyhow::Error::from)?;
        Ok((user_id, self.email.trim().to_string(), role))
    }
}

/// Raw field for the "delete user" action.
#[derive(Debug, Default, Clone)]
pub(crate) struct UserDeleteForm {
    pub(crate) user_id: String,
}

impl UserDeleteForm {
    pub(crate) fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Self> {
        Ok(Self {
            user_id: prompt_line(input, output, "Enter the User ID to delete: ")?,
        })
    }

    pub(crate) fn parse_inputs(&self) -> Result<i32> {
        self.user_id
            .trim()
            .parse::<i32>()
            .context("User ID must be an integer.")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::models::Role;

    #[test]
    fn user_form_prompts_in_routine_order() {
        let mut input = Cursor::new(b"Ada\nLovelace\nada@club.example\nsecret\nadmin\n".to_vec());
        let mut output = Vec::new();

        let form = UserForm::prompt(&mut input, &mut output).unwrap();
        let user = form.parse_inputs().unwrap();

        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.email, "ada@club.example");
        assert_eq!(user.password, "secret");
        assert_eq!(user.role, Role::Admin);

        let prompts = String::from_utf8(output).unwrap();
        assert_eq!(
            prompts,
            "First Name: Last Name: Email: Password: Role (member/admin): "
        );
    }

    #[test]
    fn user_form_rejects_unknown_role() {
        let form = UserForm {
            role: "librarian".to_string(),
            ..UserForm::default()
        };
        let err = form.parse_inputs().unwrap_err();
        assert!(err.to_string().contains("'member' or 'admin'"));
    }

    #[test]
    fn book_form_coerces_date_and_ids() {
        let form = BookForm {
            title: "Dune".to_string(),
            summary: "Desert planet epic.".to_string(),
            publish_date: "1965-08-01".to_string(),
            author_id: "3".to_string(),
            publisher_id: "1".to_string(),
            category_id: "7".to_string(),
        };

        let book = form.parse_inputs().unwrap();
        assert_eq!(book.publish_date.to_string(), "1965-08-01");
        assert_eq!(
            (book.author_id, book.publisher_id, book.category_id),
            (3, 1, 7)
        );
    }

    #[test]
    fn book_form_rejects_malformed_date() {
        let form = BookForm {
            publish_date: "01/08/1965".to_string(),
            author_id: "3".to_string(),
            publisher_id: "1".to_string(),
            category_id: "7".to_string(),
            ..BookForm::default()
        };

        let err = form.parse_inputs().unwrap_err();
        assert!(err.to_string().contains("YYYY-MM-DD"));
    }

    #[test]
    fn book_form_rejects_non_numeric_id() {
        let form = BookForm {
            publish_date: "1965-08-01".to_string(),
            author_id: "three".to_string(),
            publisher_id: "1".to_string(),
            category_id: "7".to_string(),
            ..BookForm::default()
        };

        let err = form.parse_inputs().unwrap_err();
        assert!(err.to_string().contains("Author ID"));
    }

    #[test]
    fn membership_form_returns_club_then_user() {
        let form = MembershipForm {
            club_id: " 2 ".to_string(),
            user_id: "15".to_string(),
        };
        assert_eq!(form.parse_inputs().unwrap(), (2, 15));
    }

    #[test]
    fn update_form_coerces_id_and_role() {
        let form = UserUpdateForm {
            user_id: "9".to_string(),
            email: "new@club.example".to_string(),
            role: "member".to_string(),
        };

        let (id, email, role) = form.parse_inputs().unwrap();
        assert_eq!(id, 9);
        assert_eq!(email, "new@club.example");
        assert_eq!(role, Role::Member);
    }

    #[test]
    fn delete_form_rejects_non_numeric_id() {
        let form = UserDeleteForm {
            user_id: "abc".to_string(),
        };
        assert!(form.parse_inputs().is_err());
    }
}
