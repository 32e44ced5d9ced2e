use ridlereport::models::Status;

#[test]
fn test_idle_impact_boundaries() {
    assert_eq!(Status::from_idle_impact(20.0), Status::VeryBad);
    assert_eq!(Status::from_idle_impact(19.999), Status::Bad);
    assert_eq!(Status::from_idle_impact(10.0), Status::Bad);
    assert_eq!(Status::from_idle_impact(9.99), Status::Fine);
    assert_eq!(Status::from_idle_impact(0.0), Status::Fine);
    assert_eq!(Status::from_idle_impact(-0.01), Status::Great);
}

#[test]
fn test_site_average_boundaries() {
    assert_eq!(Status::from_site_average(0.68), Status::Fine);
    assert_eq!(Status::from_site_average(0.679999), Status::Great);
    assert_eq!(Status::from_site_average(1.0), Status::Fine);
    assert_eq!(Status::from_site_average(1.000001), Status::Bad);
    assert_eq!(Status::from_site_average(1.35), Status::Bad);
    assert_eq!(Status::from_site_average(1.350001), Status::VeryBad);
}

#[test]
fn test_symbols_are_shared_between_scales() {
    assert_eq!(Status::from_idle_impact(25.0).symbol(), "🔴");
    assert_eq!(Status::from_site_average(2.0).symbol(), "🔴");
    assert_eq!(Status::from_idle_impact(15.0).symbol(), "🟠");
    assert_eq!(Status::from_site_average(1.2).symbol(), "🟠");
    assert_eq!(Status::from_idle_impact(5.0).symbol(), "🟡");
    assert_eq!(Status::from_site_average(0.9).symbol(), "🟡");
    assert_eq!(Status::from_idle_impact(-3.0).symbol(), "🟢");
    assert_eq!(Status::from_site_average(0.5).symbol(), "🟢");
    assert_eq!(Status::VeryBad.label(), "Very Bad");
}
