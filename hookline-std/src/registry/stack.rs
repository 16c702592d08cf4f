//! Stacks of hook names that are currently running.

use std::cell::RefCell;

/// Names of the hooks currently executing, innermost last.
#[derive(Debug, Default)]
pub(crate) struct ActiveStack {
    names: RefCell<Vec<String>>,
}

impl ActiveStack {
    /// Push `name` for as long as the returned guard lives.
    #[must_use = "the name is popped as soon as the guard is dropped"]
    pub(crate) fn enter(&self, name: &str) -> ActiveGuard<'_> {
        self.names.borrow_mut().push(name.to_owned());
        ActiveGuard { stack: self }
    }

    pub(crate) fn current(&self) -> Option<String> {
        self.names.borrow().last().cloned()
    }

    /// Without a name, whether anything is running at all.
    pub(crate) fn contains(&self, name: Option<&str>) -> bool {
        let names = self.names.borrow();
        match name {
            None => !names.is_empty(),
            Some(name) => names.iter().any(|active| active == name),
        }
    }

    pub(crate) fn depth(&self) -> usize {
        self.names.borrow().len()
    }
}

/// Pops the entry pushed by [`ActiveStack::enter`] on every exit path,
/// unwinding included.
pub(crate) struct ActiveGuard<'a> {
    stack: &'a ActiveStack,
}

impl Drop for ActiveGuard<'_> {
    fn drop(&mut self) {
        self.stack.names.borrow_mut().pop();
    }
}
