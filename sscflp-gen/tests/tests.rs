#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use float_cmp::approx_eq;
    use log::info;
    use test_case::test_case;

    use sscflp::entities::Instance;
    use sscflp::generators::{GeometricParams, InstanceGenerator, UnitSquareParams};
    use sscflp::io::{InstanceText, parse_instance};
    use sscflp::util::assertions;
    use sscflp_gen::config::{GenConfig, GenJob, GenMethod};
    use sscflp_gen::{driver, io};

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn geometric(seed: u64) -> GenMethod {
        GenMethod::Geometric(GeometricParams {
            n_facilities: 5,
            n_customers: 10,
            box_low: 0.0,
            box_high: 10.0,
            demand_low: 5,
            demand_high: 10,
            capacity_low: 10,
            capacity_high: 20,
            seed,
        })
    }

    fn unit_square(seed: u64) -> GenMethod {
        GenMethod::UnitSquare(UnitSquareParams {
            n_facilities: 5,
            n_customers: 10,
            demand_low: 5,
            demand_high: 35,
            capacity_low: 10,
            capacity_high: 160,
            ratio: 3.0,
            seed,
        })
    }

    fn large_geometric(seed: u64) -> GenMethod {
        GenMethod::Geometric(GeometricParams {
            n_facilities: 50,
            n_customers: 200,
            box_low: -100.0,
            box_high: 100.0,
            demand_low: 1,
            demand_high: 100,
            capacity_low: 50,
            capacity_high: 500,
            seed,
        })
    }

    fn large_unit_square(seed: u64) -> GenMethod {
        GenMethod::UnitSquare(UnitSquareParams {
            n_facilities: 50,
            n_customers: 200,
            demand_low: 5,
            demand_high: 35,
            capacity_low: 10,
            capacity_high: 160,
            ratio: 7.5,
            seed,
        })
    }

    fn generate(method: &GenMethod) -> Instance {
        let mut generator = InstanceGenerator::new();
        method.generate(&mut generator).unwrap().clone()
    }

    fn temp_folder(name: &str) -> PathBuf {
        let folder = std::env::temp_dir().join(format!("sscflp-gen-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&folder);
        folder
    }

    #[test_case(geometric(1), false, "../assets/golden/geometric_5_10_seed1.txt"; "geometric")]
    #[test_case(unit_square(1), false, "../assets/golden/unit_square_5_10_seed1.txt"; "unit square")]
    #[test_case(geometric(1), true, "../assets/golden/geometric_5_10_seed1_uflp.txt"; "geometric uflp")]
    fn golden(method: GenMethod, uflp: bool, golden_path: &str) {
        init_logger();
        let mut generator = InstanceGenerator::new();
        method.generate(&mut generator).unwrap();
        if uflp {
            generator.convert_to_uncapacitated().unwrap();
        }
        let expected = fs::read_to_string(Path::new(golden_path)).unwrap();
        assert_eq!(InstanceText(generator.instance()).to_string(), expected);
    }

    #[test_case(geometric(7); "geometric")]
    #[test_case(unit_square(7); "unit square")]
    #[test_case(large_geometric(123); "large geometric")]
    #[test_case(large_unit_square(123); "large unit square")]
    fn deterministic_across_generators(method: GenMethod) {
        let a = generate(&method);
        let b = generate(&method);
        assert_eq!(a, b);
        assert_eq!(
            InstanceText(&a).to_string(),
            InstanceText(&b).to_string()
        );
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(generate(&large_geometric(1)), generate(&large_geometric(2)));
    }

    #[test_case(large_geometric; "geometric")]
    #[test_case(large_unit_square; "unit square")]
    fn invariants_hold(method: fn(u64) -> GenMethod) {
        for seed in 0..10 {
            let instance = generate(&method(seed));
            let (n, m) = (instance.n_facilities, instance.n_customers);

            assert_eq!((n, m), (50, 200));
            assert_eq!(instance.fixed_costs.len(), n);
            assert_eq!(instance.capacities.len(), n);
            assert_eq!(instance.demands.len(), m);
            assert_eq!(instance.assignment_costs.nrows(), n);
            assert!(instance.assignment_costs.rows().into_iter().all(|r| r.len() == m));
            assert_eq!(instance.total_demand, instance.demands.iter().sum::<u64>());
            assert!(instance.demands.iter().all(|&d| d > 0));
            assert!(instance.capacities.iter().all(|&s| s > 0));
            assert!(assertions::instance_is_consistent(&instance));
        }
    }

    #[test_case(large_geometric; "geometric")]
    #[test_case(large_unit_square; "unit square")]
    fn capacity_ratio_is_reached(method: fn(u64) -> GenMethod) {
        for seed in 0..10 {
            let instance = generate(&method(seed));
            let ratio = instance.capacity_ratio.unwrap();
            let total_capacity = instance.total_capacity() as f64;
            let total_demand = instance.total_demand as f64;

            // every capacity is rounded by at most one half
            let max_rounding_error = 0.5 * instance.n_facilities as f64;
            assert!((total_capacity - ratio * total_demand).abs() <= max_rounding_error);
            assert!(approx_eq!(
                f64,
                instance.realized_capacity_ratio().unwrap(),
                ratio,
                epsilon = max_rounding_error / total_demand
            ));
        }
    }

    #[test]
    fn supplied_ratio_is_kept() {
        let instance = generate(&large_unit_square(0));
        assert_eq!(instance.capacity_ratio, Some(7.5));
    }

    #[test_case(geometric(1); "geometric")]
    #[test_case(unit_square(1); "unit square")]
    #[test_case(large_geometric(5); "large geometric")]
    fn uflp_conversion(method: GenMethod) {
        let mut generator = InstanceGenerator::new();
        method.generate(&mut generator).unwrap();
        let original = generator.instance().clone();

        let converted = generator.convert_to_uncapacitated().unwrap().clone();
        let m = converted.n_customers as u64;
        assert!(converted.capacities.iter().all(|&s| s == m));
        assert!(converted.demands.iter().all(|&d| d == 1));
        assert_eq!(converted.total_demand, m);
        for ((i, j), &c) in converted.assignment_costs.indexed_iter() {
            assert_eq!(c, original.demands[j] * original.assignment_cost(i, j));
        }

        let twice = generator.convert_to_uncapacitated().unwrap();
        assert_eq!(twice.capacities, converted.capacities);
        assert_eq!(twice.demands, converted.demands);
    }

    #[test]
    fn uflp_serialization() {
        let mut generator = InstanceGenerator::new();
        geometric(1).generate(&mut generator).unwrap();
        generator.convert_to_uncapacitated().unwrap();
        let text = InstanceText(generator.instance()).to_string();

        let lines = text.lines().collect::<Vec<_>>();
        // header, blank line, then one line per facility
        for line in &lines[2..7] {
            assert_eq!(line.split_whitespace().next(), Some("10"));
        }
        assert_eq!(lines[8].split_whitespace().collect::<Vec<_>>(), vec!["1"; 10]);
    }

    #[test]
    fn reset_restores_empty_state() {
        let mut generator = InstanceGenerator::new();
        assert_eq!(generator.instance(), &Instance::empty());

        for method in [geometric(1), unit_square(2), large_geometric(3)] {
            method.generate(&mut generator).unwrap();
            assert!(!generator.instance().is_empty());
            generator.reset();
            let instance = generator.instance();
            assert_eq!(instance, &Instance::empty());
            assert_eq!(instance.n_facilities, 0);
            assert_eq!(instance.n_customers, 0);
            assert_eq!(instance.total_demand, 0);
            assert!(instance.fixed_costs.is_empty());
            assert!(instance.capacities.is_empty());
            assert!(instance.demands.is_empty());
            assert!(instance.assignment_costs.is_empty());
        }
        generator.reset();
        assert_eq!(generator.instance(), &Instance::empty());
    }

    #[test]
    fn generation_replaces_previous_instance() {
        let mut generator = InstanceGenerator::new();
        large_geometric(1).generate(&mut generator).unwrap();
        geometric(1).generate(&mut generator).unwrap();
        assert_eq!(generator.instance(), &generate(&geometric(1)));
    }

    #[test]
    fn failed_generation_keeps_previous_instance() {
        let mut generator = InstanceGenerator::new();
        geometric(1).generate(&mut generator).unwrap();
        let before = generator.instance().clone();

        let mut params = match geometric(1) {
            GenMethod::Geometric(p) => p,
            GenMethod::UnitSquare(_) => unreachable!(),
        };
        params.n_customers = 0;
        assert!(generator.generate_geometric(&params).is_err());
        assert_eq!(generator.instance(), &before);
    }

    #[test]
    fn default_run_writes_reference_instances() {
        init_logger();
        let folder = temp_folder("default");
        let paths = driver::run(&GenConfig::default(), &folder).unwrap();
        assert_eq!(paths.len(), 2);

        for (path, golden) in paths.iter().zip([
            "../assets/golden/geometric_5_10_seed1.txt",
            "../assets/golden/unit_square_5_10_seed1.txt",
        ]) {
            info!("comparing {path:?} with {golden}");
            assert_eq!(
                fs::read_to_string(path).unwrap(),
                fs::read_to_string(golden).unwrap()
            );
        }
        assert!(folder.join("StidsenAndersenDammannInstance.txt").exists());
        assert!(folder.join("CornuejolsInstance.txt").exists());
        let _ = fs::remove_dir_all(&folder);
    }

    #[test]
    fn written_instance_can_be_read_back() {
        let folder = temp_folder("read-back");
        let config = GenConfig {
            jobs: vec![GenJob {
                name: "large".to_string(),
                method: large_unit_square(9),
                uflp: true,
            }],
        };
        let paths = driver::run(&config, &folder).unwrap();

        let read = io::read_instance(&paths[0]).unwrap();
        let mut expected = generate(&large_unit_square(9));
        expected = sscflp::generators::uflp::convert(&expected).unwrap();
        assert_eq!(read, expected);
        let _ = fs::remove_dir_all(&folder);
    }

    #[test]
    fn golden_files_parse() {
        for golden in [
            "../assets/golden/geometric_5_10_seed1.txt",
            "../assets/golden/unit_square_5_10_seed1.txt",
            "../assets/golden/geometric_5_10_seed1_uflp.txt",
        ] {
            let text = fs::read_to_string(golden).unwrap();
            let instance = parse_instance(&text).unwrap();
            assert_eq!((instance.n_facilities, instance.n_customers), (5, 10));
            assert_eq!(InstanceText(&instance).to_string(), text);
        }
    }

    #[test]
    fn invalid_job_is_reported() {
        let folder = temp_folder("invalid");
        let mut params = match unit_square(1) {
            GenMethod::UnitSquare(p) => p,
            GenMethod::Geometric(_) => unreachable!(),
        };
        params.capacity_low = 500;
        let config = GenConfig {
            jobs: vec![GenJob {
                name: "invalid".to_string(),
                method: GenMethod::UnitSquare(params),
                uflp: false,
            }],
        };
        let err = driver::run(&config, &folder).unwrap_err();
        assert!(format!("{err:#}").contains("invalid capacity interval"));
        assert!(!folder.join("invalid.txt").exists());
        let _ = fs::remove_dir_all(&folder);
    }

    #[test]
    fn unwritable_destination_is_reported() {
        let folder = temp_folder("unwritable");
        let mut generator = InstanceGenerator::new();
        let job = GenJob {
            name: "x".to_string(),
            method: geometric(1),
            uflp: false,
        };
        // the parent folder of the destination does not exist
        let path = folder.join("missing").join("x.txt");
        assert!(driver::run_job(&mut generator, &job, &path).is_err());
        // the generated instance survives the failed write
        assert_eq!(generator.instance(), &generate(&geometric(1)));
    }
}
