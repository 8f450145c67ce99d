// Pattern 7: Iterator
// A forward-only cursor over an employee group. Callers walk the group one
// employee at a time and never see how the group stores them.

use itertools::Itertools;

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Collection
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub position: String,
    pub salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, position: impl Into<String>, salary: u32) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            salary,
        }
    }
}

#[derive(Debug, Default)]
pub struct EmployeeGroup {
    employees: Vec<Employee>,
}

impl EmployeeGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> EmployeeIterator<'_> {
        EmployeeIterator::new(self)
    }
}

impl<'a> IntoIterator for &'a EmployeeGroup {
    type Item = &'a Employee;
    type IntoIter = EmployeeIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Cursor
// ============================================================================

pub struct EmployeeIterator<'a> {
    employees: &'a [Employee],
    current_index: usize,
}

impl<'a> EmployeeIterator<'a> {
    pub fn new(group: &'a EmployeeGroup) -> Self {
        Self {
            employees: &group.employees,
            current_index: 0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.current_index < self.employees.len()
    }

    /// All names, comma-separated, regardless of the cursor position.
    pub fn list(&self) -> String {
        self.employees.iter().map(|employee| employee.name.as_str()).join(", ")
    }
}

impl<'a> Iterator for EmployeeIterator<'a> {
    type Item = &'a Employee;

    fn next(&mut self) -> Option<Self::Item> {
        let employee = self.employees.get(self.current_index)?;
        self.current_index += 1;
        Some(employee)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.employees.len() - self.current_index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EmployeeIterator<'_> {}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    let mut group = EmployeeGroup::new();

    group.add_employee(Employee::new("John Doe", "Manager", 5000));
    group.add_employee(Employee::new("Jane Smith", "Developer", 4000));

    let mut cursor = EmployeeIterator::new(&group);
    out.line(cursor.list());

    while cursor.has_next() {
        if let Some(employee) = cursor.next() {
            out.line(format!(
                "Працівник: {}, Посада: {}, Зарплата: {}",
                employee.name, employee.position, employee.salary
            ));
        }
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
