// Pattern 6: Strategy
// The basket sums its goods and hands the total to whichever discount plan it
// was built with. Plans know nothing about baskets.

use tracing::debug;

use crate::error::Result;
use crate::transcript::Transcript;

// ============================================================================
// Strategies
// ============================================================================

pub trait DiscountPlan {
    fn apply_discount(&self, price: f64) -> f64;
    fn name(&self) -> &str;
}

pub struct RegularDiscountPlan;

impl DiscountPlan for RegularDiscountPlan {
    fn apply_discount(&self, price: f64) -> f64 {
        price * 0.9
    }

    fn name(&self) -> &str {
        "Regular"
    }
}

pub struct VipDiscountPlan;

impl DiscountPlan for VipDiscountPlan {
    fn apply_discount(&self, price: f64) -> f64 {
        price * 0.8
    }

    fn name(&self) -> &str {
        "VIP"
    }
}

pub struct NewClientDiscountPlan;

impl DiscountPlan for NewClientDiscountPlan {
    fn apply_discount(&self, price: f64) -> f64 {
        price * 0.95
    }

    fn name(&self) -> &str {
        "NewClient"
    }
}

// ============================================================================
// Context
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Good {
    pub name: String,
    pub price: f64,
}

impl Good {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

pub struct Basket {
    discount_plan: Box<dyn DiscountPlan>,
    goods: Vec<Good>,
}

impl Basket {
    pub fn new(discount_plan: Box<dyn DiscountPlan>) -> Self {
        Self {
            discount_plan,
            goods: Vec::new(),
        }
    }

    pub fn set_discount_plan(&mut self, discount_plan: Box<dyn DiscountPlan>) {
        self.discount_plan = discount_plan;
    }

    pub fn discount_plan_name(&self) -> &str {
        self.discount_plan.name()
    }

    pub fn add_good(&mut self, good: Good) {
        self.goods.push(good);
    }

    pub fn goods(&self) -> &[Good] {
        &self.goods
    }

    pub fn calculate_total_price(&self) -> f64 {
        let total: f64 = self.goods.iter().map(|good| good.price).sum();
        debug!(total, plan = self.discount_plan.name(), "applying discount");
        self.discount_plan.apply_discount(total)
    }
}

// ============================================================================
// Demo
// ============================================================================

pub fn run(out: &mut Transcript) -> Result<()> {
    let mut basket = Basket::new(Box::new(NewClientDiscountPlan));

    basket.add_good(Good::new("Product 1", 100.0));
    basket.add_good(Good::new("Product 2", 50.0));

    out.line(basket.calculate_total_price().to_string());
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
