/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `1+2 = 3`
    /// `8/2 = 4`
    ConstantFold,
}
