mod test_core;
mod test_risk;
