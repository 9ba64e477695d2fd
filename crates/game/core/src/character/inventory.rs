//! Consumable items and the stackable inventory that holds them.

use std::str::FromStr;

use crate::engine::InvalidActionError;

/// A consumable item definition.
///
/// Each effect field is applied independently when the item is used; a zero
/// (or `false`) field means the item has no such effect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heal_hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub heal_mp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cure_poison: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sell_price: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_stack_max"))]
    pub stack_max: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_category"))]
    pub category: String,
}

#[cfg(feature = "serde")]
fn default_stack_max() -> u32 {
    Item::DEFAULT_STACK_MAX
}

#[cfg(feature = "serde")]
fn default_category() -> String {
    "consumable".to_string()
}

impl Item {
    pub const DEFAULT_STACK_MAX: u32 = 99;

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            heal_hp: 0,
            heal_mp: 0,
            cure_poison: false,
            sell_price: 0,
            stack_max: Self::DEFAULT_STACK_MAX,
            category: "consumable".to_string(),
        }
    }

    pub fn with_heal_hp(mut self, amount: u32) -> Self {
        self.heal_hp = amount;
        self
    }

    pub fn with_heal_mp(mut self, amount: u32) -> Self {
        self.heal_mp = amount;
        self
    }

    pub fn with_cure_poison(mut self) -> Self {
        self.cure_poison = true;
        self
    }

    pub fn with_sell_price(mut self, price: u32) -> Self {
        self.sell_price = price;
        self
    }

    pub fn with_stack_max(mut self, stack_max: u32) -> Self {
        self.stack_max = stack_max;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Returns true if using this item can never have an effect.
    pub fn is_inert(&self) -> bool {
        self.heal_hp == 0 && self.heal_mp == 0 && !self.cure_poison
    }
}

/// An item together with how many units are held.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u32,
}

impl ItemStack {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub fn name(&self) -> &str {
        &self.item.name
    }

    pub fn is_full(&self) -> bool {
        self.quantity >= self.item.stack_max
    }
}

/// Ordering applied by [`Inventory::sort_by`].
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum InventorySortKey {
    /// Alphabetical by item name.
    Name,
    /// Largest stacks first.
    Quantity,
    /// Highest sell price first.
    Value,
    /// Alphabetical by category.
    Category,
}

impl InventorySortKey {
    /// Parses a sort key coming from UI or data files.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidActionError::UnknownSortKey`] for anything that is not
    /// `name`, `quantity`, `value` or `category`.
    pub fn parse(key: &str) -> Result<Self, InvalidActionError> {
        Self::from_str(key).map_err(|_| InvalidActionError::UnknownSortKey(key.to_string()))
    }
}

/// Ordered collection of item stacks.
///
/// Stacks are unique by name only as long as they fit: adding units that
/// would overflow an existing stack opens a new stack instead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stacks: Vec<ItemStack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `quantity` units of `item`.
    ///
    /// Units go onto the first stack of the same name that can hold all of
    /// them; otherwise a new stack is opened. Returns false (no mutation) if
    /// `quantity` is zero or exceeds the item's `stack_max`.
    pub fn add(&mut self, item: Item, quantity: u32) -> bool {
        if quantity == 0 || quantity > item.stack_max {
            return false;
        }
        if let Some(stack) = self
            .stacks
            .iter_mut()
            .find(|s| s.item.name == item.name && s.quantity + quantity <= s.item.stack_max)
        {
            stack.quantity += quantity;
            return true;
        }
        self.stacks.push(ItemStack::new(item, quantity));
        true
    }

    /// Removes `quantity` units from the first stack holding at least that
    /// many. Empty stacks are dropped. Returns false if no stack qualifies.
    pub fn remove(&mut self, name: &str, quantity: u32) -> bool {
        let Some(index) = self
            .stacks
            .iter()
            .position(|s| s.item.name == name && s.quantity >= quantity)
        else {
            return false;
        };
        let stack = &mut self.stacks[index];
        stack.quantity -= quantity;
        if stack.quantity == 0 {
            self.stacks.remove(index);
        }
        true
    }

    pub fn has(&self, name: &str, quantity: u32) -> bool {
        self.stacks
            .iter()
            .any(|s| s.item.name == name && s.quantity >= quantity)
    }

    /// Looks up the item definition of the first stack with this name.
    pub fn find(&self, name: &str) -> Option<&Item> {
        self.stacks
            .iter()
            .find(|s| s.item.name == name)
            .map(|s| &s.item)
    }

    /// Total units held across all stacks with this name.
    pub fn quantity_of(&self, name: &str) -> u32 {
        self.stacks
            .iter()
            .filter(|s| s.item.name == name)
            .map(|s| s.quantity)
            .sum()
    }

    pub fn sort_by(&mut self, key: InventorySortKey) {
        match key {
            InventorySortKey::Name => self.stacks.sort_by(|a, b| a.item.name.cmp(&b.item.name)),
            InventorySortKey::Quantity => self.stacks.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
            InventorySortKey::Value => self
                .stacks
                .sort_by(|a, b| b.item.sell_price.cmp(&a.item.sell_price)),
            InventorySortKey::Category => self
                .stacks
                .sort_by(|a, b| a.item.category.cmp(&b.item.category)),
        }
    }

    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a ItemStack> + 'a {
        self.stacks.iter().filter(move |s| s.item.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Mutable access to the raw stacks, bypassing the stacking rules.
    pub fn stacks_mut(&mut self) -> &mut Vec<ItemStack> {
        &mut self.stacks
    }
}
