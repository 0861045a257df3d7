#[cfg(test)]
mod tests {
    use ecs_construct::ecs::cluster::{Cluster, Vpc};
    use ecs_construct::ecs::placement::{BinPackResource, BuiltInAttributes};
    use ecs_construct::ecs::service::{EcsService, EcsServiceProps};
    use ecs_construct::ecs::task_definition::{ContainerImage, TaskDefinition};
    use ecs_construct::ecs::template::ServiceResource;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn sample_resource() -> ServiceResource {
        let mut task_definition = TaskDefinition::new("EcsTaskDef");
        task_definition.add_container(
            "web",
            ContainerImage::from_registry("amazon/amazon-ecs-sample"),
            512,
        );
        let service = EcsService::new(
            "EcsService",
            EcsServiceProps {
                cluster: Cluster::new("EcsCluster", Vpc::new("MyVpc")),
                task_definition,
                desired_count: None,
                daemon: false,
            },
        )
        .unwrap();
        service.build().unwrap()
    }

    #[test]
    fn test_resource_record_carries_type_and_properties() {
        let resource = sample_resource();
        let json = resource.to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["Type"], "AWS::ECS::Service");
        assert_eq!(value["Properties"]["Cluster"], "EcsCluster");
    }

    #[test]
    fn test_to_file_writes_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("service.json");

        sample_resource().to_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["Type"], "AWS::ECS::Service");
        assert_eq!(value["Properties"]["SchedulingStrategy"], "REPLICA");
    }

    #[test]
    fn test_to_file_writes_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("service.yaml");

        sample_resource().to_file(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
        assert_eq!(value["Type"], "AWS::ECS::Service");
        assert_eq!(value["Properties"]["DesiredCount"], 1);
    }

    #[test]
    fn test_built_in_attribute_tokens() {
        assert_eq!(
            BuiltInAttributes::AVAILABILITY_ZONE,
            "attribute:ecs.availability-zone"
        );
        assert_eq!(BuiltInAttributes::INSTANCE_ID, "instanceId");
        assert_eq!(
            BuiltInAttributes::INSTANCE_TYPE,
            "attribute:ecs.instance-type"
        );
        assert_eq!(BuiltInAttributes::AMI_ID, "attribute:ecs.ami-id");
    }

    #[test]
    fn test_binpack_resource_field_names() {
        assert_eq!(BinPackResource::Cpu.field_name(), "cpu");
        assert_eq!(BinPackResource::Memory.field_name(), "memory");
    }
}
