//! Display implementations for domain models.

use std::fmt;

use crate::models::{Item, ItemWithList, ListGroup, ListGroups};

impl Item {
    fn checkbox(&self) -> &'static str {
        if self.done {
            "[x]"
        } else {
            "[ ]"
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- {} {} (#{})", self.checkbox(), self.content, self.id)
    }
}

impl fmt::Display for ItemWithList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Content: {}", self.item.content)?;
        writeln!(f, "- List: {}", self.list_title)?;
        let status = if self.item.done { "Done" } else { "Todo" };
        writeln!(f, "- Status: {status}")
    }
}

impl fmt::Display for ListGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl fmt::Display for ListGroups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, group) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{group}")?;
        }
        Ok(())
    }
}
