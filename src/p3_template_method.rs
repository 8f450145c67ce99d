// Pattern 3: Template Method
// `make_tea` fixes the order of every step. Only the condiments step varies,
// and it is passed in as a value instead of being overridden by a subclass.

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// The customizable step
// ============================================================================

pub trait Condiments {
    fn add_condiments(&self, out: &mut Transcript);
}

/// No condiments: the step runs and prints nothing.
pub struct Plain;

impl Condiments for Plain {
    fn add_condiments(&self, _out: &mut Transcript) {}
}

pub struct GreenTea;

impl Condiments for GreenTea {
    fn add_condiments(&self, out: &mut Transcript) {
        out.line("Додаємо мед, щоб приготувати зелений чай...");
    }
}

pub struct BlackTea;

impl Condiments for BlackTea {
    fn add_condiments(&self, out: &mut Transcript) {
        out.line("Додаємо мед, щоб приготувати чорний чай...");
    }
}

// Ad-hoc recipes
impl<F> Condiments for F
where
    F: Fn(&mut Transcript),
{
    fn add_condiments(&self, out: &mut Transcript) {
        self(out)
    }
}

// ============================================================================
// The fixed procedure
// ============================================================================

fn boil_water(out: &mut Transcript) {
    out.line("Кип'ятимо воду....");
}

fn add_tea_leaves(out: &mut Transcript) {
    out.line("Додаємо чайні листки....");
}

fn steep_tea(out: &mut Transcript) {
    out.line("Заварюємо чай....");
}

fn pour_into_cup(out: &mut Transcript) {
    out.line("Переливаємо чай в чашку....");
}

fn serve_tea(out: &mut Transcript) {
    out.line("Чай подається!");
}

pub fn make_tea<C: Condiments + ?Sized>(recipe: &C, out: &mut Transcript) {
    boil_water(out);
    add_tea_leaves(out);
    steep_tea(out);
    pour_into_cup(out);
    recipe.add_condiments(out);
    serve_tea(out);
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    make_tea(&GreenTea, out);
    make_tea(&BlackTea, out);
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
