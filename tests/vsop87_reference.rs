use approx::assert_relative_eq;
use ephemeris::{
    coordinates::{centered_angle, Spherical},
    orbital_models::{
        vsop87::{
            elliptic, evaluate, evaluate_elements, vsop87a, vsop87c, vsop87d, EllipticTable,
            Vsop87, Vsop87Table,
        },
        OrbitalModel,
    },
    time::Instant,
};
use nalgebra::Vector3;

const POSITION_TOLERANCE: f64 = 1e-9;
const VELOCITY_TOLERANCE: f64 = 1e-7;

/// Angles of the published check file carry ten decimals.
const ANGLE_TOLERANCE: f64 = 2e-10;

/// Check dates of the published solution: J2000 and every 36525 days back to 1100.
const CHECK_DATES: [f64; 10] = [
    2451545.0, 2415020.0, 2378495.0, 2341970.0, 2305445.0, 2268920.0, 2232395.0, 2195870.0,
    2159345.0, 2122820.0,
];

type Spherical87 = fn(f64) -> vsop87::SphericalCoordinates;
type Rectangular87 = fn(f64) -> vsop87::RectangularCoordinates;

/// Heliocentric L, B (radians) on the ecliptic of date, VSOP87D.
#[rustfmt::skip]
static PUBLISHED_SPHERICAL: [(&Vsop87Table, f64, [f64; 2]); 80] = [
    (&vsop87d::MERCURY, 2451545.0, [4.4293481036, -0.0527573409]),
    (&vsop87d::MERCURY, 2415020.0, [3.4851161911, 0.0565906173]),
    (&vsop87d::MERCURY, 2378495.0, [2.0737894888, 0.1168184804]),
    (&vsop87d::MERCURY, 2341970.0, [0.1910149587, -0.0682441256]),
    (&vsop87d::MERCURY, 2305445.0, [5.1836421820, -0.1170914848]),
    (&vsop87d::MERCURY, 2268920.0, [4.2636517903, -0.0457048516]),
    (&vsop87d::MERCURY, 2232395.0, [3.3115600862, 0.0639722347]),
    (&vsop87d::MERCURY, 2195870.0, [1.8738888759, 0.1126774697]),
    (&vsop87d::MERCURY, 2159345.0, [6.2819826060, -0.0768697084]),
    (&vsop87d::MERCURY, 2122820.0, [5.0128397764, -0.1143275808]),
    (&vsop87d::VENUS, 2451545.0, [3.1870221833, 0.0569782849]),
    (&vsop87d::VENUS, 2415020.0, [5.9749622238, -0.0591260014]),
    (&vsop87d::VENUS, 2378495.0, [2.5083656668, 0.0552309407]),
    (&vsop87d::VENUS, 2341970.0, [5.3115708036, -0.0455979904]),
    (&vsop87d::VENUS, 2305445.0, [1.8291359617, 0.0311394084]),
    (&vsop87d::VENUS, 2268920.0, [4.6495448744, -0.0145437542]),
    (&vsop87d::VENUS, 2232395.0, [1.1527504143, -0.0054100666]),
    (&vsop87d::VENUS, 2195870.0, [3.9850309909, 0.0222342485]),
    (&vsop87d::VENUS, 2159345.0, [0.4804699931, -0.0395505250]),
    (&vsop87d::VENUS, 2122820.0, [3.3145399295, 0.0505016053]),
    (&vsop87d::EARTH, 2451545.0, [1.7519238681, -0.0000039656]),
    (&vsop87d::EARTH, 2415020.0, [1.7391225563, -0.0000005679]),
    (&vsop87d::EARTH, 2378495.0, [1.7262638916, 0.0000002083]),
    (&vsop87d::EARTH, 2341970.0, [1.7134419105, 0.0000025051]),
    (&vsop87d::EARTH, 2305445.0, [1.7006065938, -0.0000016359]),
    (&vsop87d::EARTH, 2268920.0, [1.6877624960, -0.0000020340]),
    (&vsop87d::EARTH, 2232395.0, [1.6750110961, 0.0000037879]),
    (&vsop87d::EARTH, 2195870.0, [1.6622048657, 0.0000015133]),
    (&vsop87d::EARTH, 2159345.0, [1.6495143197, -0.0000013003]),
    (&vsop87d::EARTH, 2122820.0, [1.6367193623, -0.0000031292]),
    (&vsop87d::MARS, 2451545.0, [6.2735389983, -0.0247779824]),
    (&vsop87d::MARS, 2415020.0, [4.9942005211, -0.0271965869]),
    (&vsop87d::MARS, 2378495.0, [3.8711855478, 0.0034969939]),
    (&vsop87d::MARS, 2341970.0, [2.9166648690, 0.0280268149]),
    (&vsop87d::MARS, 2305445.0, [2.0058210394, 0.0300702181]),
    (&vsop87d::MARS, 2268920.0, [1.0050966939, 0.0066676098]),
    (&vsop87d::MARS, 2232395.0, [6.0979760762, -0.0266794243]),
    (&vsop87d::MARS, 2195870.0, [4.8193924948, -0.0255031923]),
    (&vsop87d::MARS, 2159345.0, [3.6939294875, 0.0065885509]),
    (&vsop87d::MARS, 2122820.0, [2.7367104344, 0.0295522719]),
    (&vsop87d::JUPITER, 2451545.0, [0.6334614186, -0.0205001039]),
    (&vsop87d::JUPITER, 2415020.0, [4.0927527024, 0.0161446618]),
    (&vsop87d::JUPITER, 2378495.0, [1.5255696771, -0.0043606936]),
    (&vsop87d::JUPITER, 2341970.0, [4.8888943125, -0.0011098085]),
    (&vsop87d::JUPITER, 2305445.0, [2.3348832684, 0.0140523907]),
    (&vsop87d::JUPITER, 2268920.0, [5.7527666852, -0.0188346311]),
    (&vsop87d::JUPITER, 2232395.0, [3.0889515350, 0.0231157947]),
    (&vsop87d::JUPITER, 2195870.0, [0.3776503430, -0.0222448936]),
    (&vsop87d::JUPITER, 2159345.0, [3.8455069137, 0.0185554473]),
    (&vsop87d::JUPITER, 2122820.0, [1.2695066546, -0.0075335740]),
    (&vsop87d::SATURN, 2451545.0, [0.7980038761, -0.0401984149]),
    (&vsop87d::SATURN, 2415020.0, [4.6512836347, 0.0192701409]),
    (&vsop87d::SATURN, 2378495.0, [2.1956677359, 0.0104156566]),
    (&vsop87d::SATURN, 2341970.0, [5.8113963637, -0.0291472787]),
    (&vsop87d::SATURN, 2305445.0, [3.5217555199, 0.0437035058]),
    (&vsop87d::SATURN, 2268920.0, [0.8594235308, -0.0379350088]),
    (&vsop87d::SATURN, 2232395.0, [4.6913199264, 0.0146771898]),
    (&vsop87d::SATURN, 2195870.0, [2.2948875823, 0.0178533697]),
    (&vsop87d::SATURN, 2159345.0, [5.8660241564, -0.0333866503]),
    (&vsop87d::SATURN, 2122820.0, [3.5570108069, 0.0435371139]),
    (&vsop87d::URANUS, 2451545.0, [5.5225485803, -0.0119527838]),
    (&vsop87d::URANUS, 2415020.0, [4.3397761173, 0.0011570307]),
    (&vsop87d::URANUS, 2378495.0, [3.0388348558, 0.0132392955]),
    (&vsop87d::URANUS, 2341970.0, [1.7242204720, 0.0059836565]),
    (&vsop87d::URANUS, 2305445.0, [0.5223325214, -0.0089983885]),
    (&vsop87d::URANUS, 2268920.0, [5.6817615582, -0.0129257254]),
    (&vsop87d::URANUS, 2232395.0, [4.5254482963, -0.0019303340]),
    (&vsop87d::URANUS, 2195870.0, [3.2557221720, 0.0120919639]),
    (&vsop87d::URANUS, 2159345.0, [1.9333853935, 0.0088045918]),
    (&vsop87d::URANUS, 2122820.0, [0.7007226224, -0.0065610611]),
    (&vsop87d::NEPTUNE, 2451545.0, [5.3045629252, 0.0042236789]),
    (&vsop87d::NEPTUNE, 2415020.0, [1.4956195225, -0.0219610030]),
    (&vsop87d::NEPTUNE, 2378495.0, [3.9290537977, 0.0310692112]),
    (&vsop87d::NEPTUNE, 2341970.0, [0.0815199679, -0.0260752533]),
    (&vsop87d::NEPTUNE, 2305445.0, [2.5537079778, 0.0102374010]),
    (&vsop87d::NEPTUNE, 2268920.0, [4.9678695785, 0.0116907777]),
    (&vsop87d::NEPTUNE, 2232395.0, [1.1523661584, -0.0273547725]),
    (&vsop87d::NEPTUNE, 2195870.0, [3.5930943433, 0.0316878975]),
    (&vsop87d::NEPTUNE, 2159345.0, [6.0203596580, -0.0215169842]),
    (&vsop87d::NEPTUNE, 2122820.0, [2.2124988267, 0.0027498093]),
];

/// Heliocentric X, Y (AU): VSOP87C on the ecliptic of date, VSOP87A on the ecliptic J2000.
#[rustfmt::skip]
static PUBLISHED_RECTANGULAR: [(&Vsop87Table, f64, [f64; 2]); 100] = [
    (&vsop87c::MERCURY, 2451545.0, [-0.1300934112, -0.4472876717]),
    (&vsop87c::MERCURY, 2415020.0, [-0.3932698769, -0.1406751043]),
    (&vsop87c::MERCURY, 2378495.0, [-0.1548281758, 0.2814058364]),
    (&vsop87c::MERCURY, 2341970.0, [0.3312331229, 0.0640513914]),
    (&vsop87c::MERCURY, 2305445.0, [0.1950803107, -0.3828531309]),
    (&vsop87c::MERCURY, 2268920.0, [-0.2020188182, -0.4195626841]),
    (&vsop87c::MERCURY, 2232395.0, [-0.4084179067, -0.0700940263]),
    (&vsop87c::MERCURY, 2195870.0, [-0.0951835365, 0.3043652763]),
    (&vsop87c::MERCURY, 2159345.0, [0.3404269126, -0.0004094321]),
    (&vsop87c::MERCURY, 2122820.0, [0.1279588350, -0.4129965856]),
    (&vsop87c::VENUS, 2451545.0, [-0.7183022790, -0.0326545995]),
    (&vsop87c::VENUS, 2415020.0, [0.6919778854, -0.2203045663]),
    (&vsop87c::VENUS, 2378495.0, [-0.5783536698, 0.4245514325]),
    (&vsop87c::VENUS, 2341970.0, [0.4103332105, -0.6008366749]),
    (&vsop87c::VENUS, 2305445.0, [-0.1835053718, 0.6944530427]),
    (&vsop87c::VENUS, 2268920.0, [-0.0456738890, -0.7258238140]),
    (&vsop87c::VENUS, 2232395.0, [0.2925184049, 0.6584829436]),
    (&vsop87c::VENUS, 2195870.0, [-0.4817622080, -0.5412019869]),
    (&vsop87c::VENUS, 2159345.0, [0.6411201421, 0.3341571871]),
    (&vsop87c::VENUS, 2122820.0, [-0.7099110735, -0.1240161268]),
    (&vsop87c::EARTH, 2451545.0, [-0.1771354615, 0.9672416229]),
    (&vsop87c::EARTH, 2415020.0, [-0.1647294827, 0.9693720024]),
    (&vsop87c::EARTH, 2378495.0, [-0.1522449491, 0.9713689619]),
    (&vsop87c::EARTH, 2341970.0, [-0.1397668624, 0.9731643443]),
    (&vsop87c::EARTH, 2305445.0, [-0.1272616591, 0.9748538870]),
    (&vsop87c::EARTH, 2268920.0, [-0.1147252848, 0.9763645265]),
    (&vsop87c::EARTH, 2232395.0, [-0.1022656436, 0.9777418151]),
    (&vsop87c::EARTH, 2195870.0, [-0.0897381298, 0.9789899623]),
    (&vsop87c::EARTH, 2159345.0, [-0.0773033683, 0.9799998884]),
    (&vsop87c::EARTH, 2122820.0, [-0.0647576071, 0.9808979021]),
    (&vsop87c::MARS, 2451545.0, [1.3907159218, -0.0134157060]),
    (&vsop87c::MARS, 2415020.0, [0.3952725706, -1.3652842040]),
    (&vsop87c::MARS, 2378495.0, [-1.1640169843, -1.0408461240]),
    (&vsop87c::MARS, 2341970.0, [-1.6160583003, 0.3697531114]),
    (&vsop87c::MARS, 2305445.0, [-0.6896577496, 1.4840391395]),
    (&vsop87c::MARS, 2268920.0, [0.8106181241, 1.2767287234]),
    (&vsop87c::MARS, 2232395.0, [1.3682927953, -0.2563584217]),
    (&vsop87c::MARS, 2195870.0, [0.1516988677, -1.4122847590]),
    (&vsop87c::MARS, 2159345.0, [-1.3274727561, -0.8181547191]),
    (&vsop87c::MARS, 2122820.0, [-1.5224566563, 0.6524641789]),
    (&vsop87c::JUPITER, 2451545.0, [4.0011739729, 2.9385810260]),
    (&vsop87c::JUPITER, 2415020.0, [-3.1268885679, -4.3833244169]),
    (&vsop87c::JUPITER, 2378495.0, [0.2320147906, 5.1265494302]),
    (&vsop87c::JUPITER, 2341970.0, [0.9111045637, -5.1081933867]),
    (&vsop87c::JUPITER, 2305445.0, [-3.6969935264, 3.8580245750]),
    (&vsop87c::JUPITER, 2268920.0, [4.3137648979, -2.5299346444]),
    (&vsop87c::JUPITER, 2232395.0, [-5.4401549180, 0.2866406676]),
    (&vsop87c::JUPITER, 2195870.0, [4.6200396688, 1.8327269764]),
    (&vsop87c::JUPITER, 2159345.0, [-4.1078797676, -3.4875973204]),
    (&vsop87c::JUPITER, 2122820.0, [1.5191368970, 4.8886161890]),
    (&vsop87c::SATURN, 2451545.0, [6.4064067820, 6.5699928470]),
    (&vsop87c::SATURN, 2415020.0, [-0.6146416433, -10.0461993857]),
    (&vsop87c::SATURN, 2378495.0, [-5.3256669097, 7.3835415374]),
    (&vsop87c::SATURN, 2341970.0, [8.6927631230, -4.4352082613]),
    (&vsop87c::SATURN, 2305445.0, [-9.0518360159, -3.6171280351]),
    (&vsop87c::SATURN, 2268920.0, [5.9153005788, 6.8629464080]),
    (&vsop87c::SATURN, 2232395.0, [-0.2128973849, -10.1032378666]),
    (&vsop87c::SATURN, 2195870.0, [-6.0841827843, 6.8799721146]),
    (&vsop87c::SATURN, 2159345.0, [8.7651857163, -3.8844835882]),
    (&vsop87c::SATURN, 2122820.0, [-9.0192283867, -3.9782745625]),
    (&vsop87c::URANUS, 2451545.0, [14.4318933505, -13.7343158729]),
    (&vsop87c::URANUS, 2415020.0, [-6.9142977663, -17.6894115248]),
    (&vsop87c::URANUS, 2378495.0, [-18.2009931564, 1.8769054707]),
    (&vsop87c::URANUS, 2341970.0, [-2.8725042471, 18.5754947897]),
    (&vsop87c::URANUS, 2305445.0, [17.1435210736, 9.8688935302]),
    (&vsop87c::URANUS, 2268920.0, [16.5140119842, -11.3323922781]),
    (&vsop87c::URANUS, 2232395.0, [-3.5812895193, -18.9336732631]),
    (&vsop87c::URANUS, 2195870.0, [-18.2738161643, -2.0946851368]),
    (&vsop87c::URANUS, 2159345.0, [-6.5914700062, 17.3751653226]),
    (&vsop87c::URANUS, 2122820.0, [14.9518051060, 12.6122126488]),
    (&vsop87c::NEPTUNE, 2451545.0, [16.8121111222, -24.9916630358]),
    (&vsop87c::NEPTUNE, 2415020.0, [2.2429528712, 29.7794830302]),
    (&vsop87c::NEPTUNE, 2378495.0, [-21.3855253884, -21.4739440135]),
    (&vsop87c::NEPTUNE, 2341970.0, [29.7592752326, 2.4313629968]),
    (&vsop87c::NEPTUNE, 2305445.0, [-25.0753375458, 16.7126213836]),
    (&vsop87c::NEPTUNE, 2268920.0, [7.6259089976, -29.1970035319]),
    (&vsop87c::NEPTUNE, 2232395.0, [12.1172445471, 27.2486873864]),
    (&vsop87c::NEPTUNE, 2195870.0, [-27.2598513119, -13.2185335840]),
    (&vsop87c::NEPTUNE, 2159345.0, [28.8728659385, -7.7682281056]),
    (&vsop87c::NEPTUNE, 2122820.0, [-17.9958638451, 24.0846111039]),
    (&vsop87a::EARTH, 2451545.0, [-0.1771354586, 0.9672416237]),
    (&vsop87a::EARTH, 2415020.0, [-0.1883079649, 0.9650688844]),
    (&vsop87a::EARTH, 2378495.0, [-0.1993918002, 0.9627974368]),
    (&vsop87a::EARTH, 2341970.0, [-0.2104654652, 0.9603579954]),
    (&vsop87a::EARTH, 2305445.0, [-0.2214982928, 0.9578483181]),
    (&vsop87a::EARTH, 2268920.0, [-0.2324780153, 0.9551975793]),
    (&vsop87a::EARTH, 2232395.0, [-0.2435134343, 0.9524373311]),
    (&vsop87a::EARTH, 2195870.0, [-0.2544603371, 0.9495904257]),
    (&vsop87a::EARTH, 2159345.0, [-0.2654547156, 0.9465233602]),
    (&vsop87a::EARTH, 2122820.0, [-0.2763146784, 0.9433985307]),
    (&vsop87a::JUPITER, 2451545.0, [4.0011740268, 2.9385810077]),
    (&vsop87a::JUPITER, 2415020.0, [-3.0191224350, -4.4582563705]),
    (&vsop87a::JUPITER, 2378495.0, [-0.0180390004, 5.1317748839]),
    (&vsop87a::JUPITER, 2341970.0, [1.2817318353, -5.0280079874]),
    (&vsop87a::JUPITER, 2305445.0, [-4.0547959775, 3.4799857072]),
    (&vsop87a::JUPITER, 2268920.0, [4.5891471727, -1.9870837931]),
    (&vsop87a::JUPITER, 2232395.0, [-5.4239396005, -0.5085487291]),
    (&vsop87a::JUPITER, 2195870.0, [4.2423286340, 2.5898433579]),
    (&vsop87a::JUPITER, 2159345.0, [-3.3554806095, -4.2166702224]),
    (&vsop87a::JUPITER, 2122820.0, [0.4207861894, 5.1019591310]),
];

fn spherical_cases() -> [(&'static str, &'static Vsop87Table, Spherical87); 8] {
    [
        ("Mercury", &vsop87d::MERCURY, vsop87::vsop87d::mercury),
        ("Venus", &vsop87d::VENUS, vsop87::vsop87d::venus),
        ("Earth", &vsop87d::EARTH, vsop87::vsop87d::earth),
        ("Mars", &vsop87d::MARS, vsop87::vsop87d::mars),
        ("Jupiter", &vsop87d::JUPITER, vsop87::vsop87d::jupiter),
        ("Saturn", &vsop87d::SATURN, vsop87::vsop87d::saturn),
        ("Uranus", &vsop87d::URANUS, vsop87::vsop87d::uranus),
        ("Neptune", &vsop87d::NEPTUNE, vsop87::vsop87d::neptune),
    ]
}

fn rectangular_cases() -> [(&'static str, &'static Vsop87Table, Rectangular87); 10] {
    [
        ("Mercury C", &vsop87c::MERCURY, vsop87::vsop87c::mercury),
        ("Venus C", &vsop87c::VENUS, vsop87::vsop87c::venus),
        ("Earth C", &vsop87c::EARTH, vsop87::vsop87c::earth),
        ("Mars C", &vsop87c::MARS, vsop87::vsop87c::mars),
        ("Jupiter C", &vsop87c::JUPITER, vsop87::vsop87c::jupiter),
        ("Saturn C", &vsop87c::SATURN, vsop87::vsop87c::saturn),
        ("Uranus C", &vsop87c::URANUS, vsop87::vsop87c::uranus),
        ("Neptune C", &vsop87c::NEPTUNE, vsop87::vsop87c::neptune),
        ("Earth A", &vsop87a::EARTH, vsop87::vsop87a::earth),
        ("Jupiter A", &vsop87a::JUPITER, vsop87::vsop87a::jupiter),
    ]
}

fn millennia(jd: f64) -> f64 {
    (jd - 2451545.0) / 365250.0
}

fn spherical_position(coordinates: vsop87::SphericalCoordinates) -> Vector3<f64> {
    Spherical::new(
        coordinates.distance(),
        coordinates.longitude(),
        coordinates.latitude(),
    )
    .to_cartesian()
}

fn rectangular_position(coordinates: vsop87::RectangularCoordinates) -> Vector3<f64> {
    Vector3::new(coordinates.x, coordinates.y, coordinates.z)
}

/// Central difference over ±0.01 day
fn finite_velocity(position: impl Fn(f64) -> Vector3<f64>, jd: f64) -> Vector3<f64> {
    let h = 0.01;
    (position(jd + h) - position(jd - h)) / (2.0 * h)
}

#[test]
fn test_published_spherical_check_values() {
    for &(table, jd, [longitude, latitude]) in PUBLISHED_SPHERICAL.iter() {
        let (values, _) = evaluate(table, millennia(jd));
        let dl = centered_angle(values[0] - longitude);
        let db = values[1] - latitude;
        assert!(dl.abs() < ANGLE_TOLERANCE, "JD {jd}: ΔL = {dl:e} rad");
        assert!(db.abs() < ANGLE_TOLERANCE, "JD {jd}: ΔB = {db:e} rad");
    }
}

#[test]
fn test_published_rectangular_check_values() {
    for &(table, jd, [x, y]) in PUBLISHED_RECTANGULAR.iter() {
        let (values, _) = evaluate(table, millennia(jd));
        assert!((values[0] - x).abs() < POSITION_TOLERANCE, "JD {jd}: X = {}", values[0]);
        assert!((values[1] - y).abs() < POSITION_TOLERANCE, "JD {jd}: Y = {}", values[1]);
    }
}

#[test]
fn test_spherical_series_against_full_solution() {
    for (name, table, reference) in spherical_cases() {
        let mut model = Vsop87::new(table);
        for jd in CHECK_DATES.into_iter().chain([2458239.5, 2469807.5]) {
            let phase = model
                .compute_cartesian(Instant::from_julian_day(jd), true)
                .unwrap();
            let position = spherical_position(reference(jd));
            let velocity = finite_velocity(|jd| spherical_position(reference(jd)), jd);

            let dp = (phase.position - position).amax();
            let dv = (phase.velocity - velocity).amax();
            assert!(dp < POSITION_TOLERANCE, "{name} at JD {jd}: Δr = {dp:e} AU");
            assert!(dv < VELOCITY_TOLERANCE, "{name} at JD {jd}: Δv = {dv:e} AU/d");
        }
    }
}

#[test]
fn test_rectangular_series_against_full_solution() {
    for (name, table, reference) in rectangular_cases() {
        for jd in CHECK_DATES.into_iter().chain([2458239.5, 2469807.5]) {
            let (position, velocity) = evaluate(table, millennia(jd));

            let dp = (position - rectangular_position(reference(jd))).amax();
            let fd = finite_velocity(|jd| rectangular_position(reference(jd)), jd);
            let dv = (velocity - fd).amax();
            assert!(dp < POSITION_TOLERANCE, "{name} at JD {jd}: Δr = {dp:e} AU");
            assert!(dv < VELOCITY_TOLERANCE, "{name} at JD {jd}: Δv = {dv:e} AU/d");
        }
    }
}

#[test]
fn test_elliptic_elements_against_full_solution() {
    let cases: [(&EllipticTable, fn(f64) -> vsop87::VSOP87Elements); 3] = [
        (&elliptic::MERCURY, vsop87::mercury),
        (&elliptic::EARTH_MOON, vsop87::earth_moon),
        (&elliptic::JUPITER, vsop87::jupiter),
    ];
    for (table, reference) in cases {
        for jd in CHECK_DATES {
            let ours = evaluate_elements(table, millennia(jd));
            let full = reference(jd);
            assert_relative_eq!(ours.semi_major_axis, full.a, epsilon = 1e-10);
            assert_relative_eq!(
                centered_angle(ours.mean_longitude - full.l),
                0.0,
                epsilon = 1e-10
            );
            assert_relative_eq!(ours.k, full.k, epsilon = 1e-10);
            assert_relative_eq!(ours.h, full.h, epsilon = 1e-10);
            assert_relative_eq!(ours.q, full.q, epsilon = 1e-10);
            assert_relative_eq!(ours.p, full.p, epsilon = 1e-10);
        }
    }
}

#[test]
fn test_elliptic_positions_follow_j2000_series() {
    // the main version drifts from VSOP87A by up to 2e-6 AU over the nine centuries
    for jd in CHECK_DATES {
        let position = evaluate_elements(&elliptic::JUPITER, millennia(jd))
            .position()
            .unwrap();
        let reference = rectangular_position(vsop87::vsop87a::jupiter(jd));
        assert_relative_eq!(position, reference, epsilon = 5e-6);
    }
}

#[test]
fn test_j2000_model_reports_ecliptic_of_date() {
    // Earth from VSOP87A, precessed, lands on the VSOP87C solution of date
    let jd = 2458239.5;
    let mut model = Vsop87::new(&vsop87a::EARTH);
    let phase = model
        .compute_cartesian(Instant::from_julian_day(jd), false)
        .unwrap();
    let of_date = rectangular_position(vsop87::vsop87c::earth(jd));
    assert_relative_eq!(phase.position, of_date, epsilon = 1e-8);
}
