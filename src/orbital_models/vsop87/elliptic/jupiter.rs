//! VSOP87 elliptic elements of Jupiter: a, λ, k, h, q, p on the ecliptic and equinox J2000.

use std::f64::consts::PI;

use super::super::{EllipticTable, Term};

const A0: &[Term] = &[
    [5.20260319132, 0.0, 0.0],
    [0.00069070151, 5.72686174779, 632.7837393132],
    [0.00032272046, 1.90381613358, 103.0927742186],
    [0.00031138634, 5.46486196547, 949.1756089698],
    [0.0002181433, 0.70025220178, 419.4846438752],
    [0.00025558941, 6.15962426898, 7.1135470008],
    [0.00020585372, 5.98131661466, 316.3918696566],
    [0.00011836569, 0.41496888665, 735.8765135318],
    [0.00014633106, 5.20240925402, 1265.5674786264],
    [0.00006702248, 0.13787303369, 1052.2683831884],
    [0.00006545032, 1.97539564312, 206.1855484372],
    [0.00007808378, 1.1539218525, 5753.3848848968],
    [0.00005492322, 6.22811858833, 110.2063212194],
    [0.00007016965, 4.94542752265, 1581.959348283],
    [0.00007170006, 2.57687162897, 9683.5945811164],
    [0.00003812238, 6.1488951165, 1368.660252845],
    [0.00003161638, 1.66903371591, 522.5774180938],
    [0.00003403855, 4.69439311157, 1898.3512179396],
    [0.00002159445, 5.88093480007, 1685.0521225016],
    [0.00002137176, 4.12641996837, 529.6909650946],
    [0.00001907151, 1.3857317786, 838.9692877504],
    [0.00002098973, 0.26695969427, 1162.4747044078],
    [0.00001629945, 0.03571048023, 1478.8665740644],
    [0.00001661953, 4.44977785904, 2214.7430875962],
    [0.00001186903, 2.64995167523, 846.0828347512],
    [0.00001214418, 5.61722097881, 2001.4439921582],
    [0.00001269999, 3.71806964818, 426.598190876],
    [0.00001213593, 1.06750572685, 1155.361157407],
    [0.00001312912, 2.44966148532, 639.897286314],
    [0.00001103727, 6.066784314, 1795.258443721],
    [0.00000914858, 3.36559328209, 742.9900605326],
    [0.00000974288, 5.89601604039, 625.6701923124],
    [0.00000782504, 0.77273627414, 1471.7530270636],
    [0.00000889721, 2.20077367657, 956.2891559706],
    [0.00000694888, 4.8925158049, 213.299095438],
    [0.0000067816, 5.35755126139, 2317.8358618148],
    [0.00000814257, 4.21211039403, 2531.1349572528],
    [0.00000697537, 5.8104565231, 2111.6503133776],
    [0.00000805974, 2.80173624193, 909.8187330546],
    [0.00000667877, 5.64425942934, 942.062061969],
    [0.00000573855, 3.1501113548, 1059.3819301892],
    [0.00000713818, 5.60425642515, 2810.9214616052],
    [0.00000505382, 0.8461825358, 412.3710968744],
    [0.00000495462, 2.63267910115, 95.9792272178],
    [0.00000500552, 0.48413498069, 1788.1448967202],
    [0.00000594328, 2.91219176914, 309.2783226558],
    [0.00000629495, 3.80414239573, 25558.2121764796],
    [0.00000553323, 1.95185697222, 1272.6810256272],
    [0.00000479787, 6.01749382975, 14.2270940016],
    [0.00000385538, 0.55987034622, 728.762966531],
    [0.00000422961, 5.55305092929, 2428.0421830342],
    [0.00000409556, 2.85811447899, 1375.7737998458],
    [0.00000376133, 5.10198361031, 2634.2277314714],
    [0.00000407798, 0.80664010126, 5223.6939198022],
    [0.00000405, 5.39904385827, 1258.4539316256],
    [0.00000399559, 3.98214629886, 2847.5268269094],
    [0.0000036462, 2.22757788713, 9153.9036160218],
    [0.00000316126, 0.20126046974, 2104.5367663768],
    [0.00000278334, 0.28492764313, 1045.1548361876],
    [0.00000328094, 1.70664328673, 1589.0728952838],
    [0.00000249351, 5.29610134269, 2744.4340526908],
    [0.00000207286, 4.85063960045, 2950.619601128],
    [0.00000229315, 5.16891592611, 1574.8458012822],
    [0.00000196915, 6.20658745912, 2420.9286360334],
    [0.00000191018, 0.01619214426, 1361.5467058442],
    [0.00000204279, 2.11770916591, 199.0720014364],
    [0.0000019615, 3.76074975148, 3163.918696566],
    [0.00000229801, 2.21004165963, 1692.1656695024],
    [0.00000227728, 3.14192283306, 983.1158589136],
    [0.00000188834, 1.48146935936, 1905.4647649404],
    [0.00000185634, 0.42608712195, 835.0371344873],
    [0.00000160749, 5.54977170114, 380.12776796],
    [0.00000159675, 1.77145336275, 2008.557539159],
    [0.00000143977, 5.04046635936, 3060.8259223474],
    [0.00000125818, 6.03551625731, 1677.9385755008],
    [0.00000173418, 4.20461421029, 1364.7280995819],
    [0.0000012103, 5.9331704782, 2737.32050569],
    [0.00000129103, 1.80630457578, 515.463871093],
    [0.00000113555, 4.60369118489, 3267.0114707846],
    [0.00000123493, 4.95938566355, 1891.2376709388],
    [0.00000112045, 6.006177128, 117.3198682202],
    [0.00000126801, 0.57171213904, 51646.11531805379],
    [0.00000125408, 1.11153617336, 12036.4607348882],
    [0.00000125371, 3.15768545141, 3.9321532631],
    [0.00000110668, 1.38105473624, 2324.9494088156],
    [0.00000131672, 4.4813501019, 323.5054166574],
    [0.00000096825, 1.51897848684, 831.8557407496],
    [0.00000096284, 3.54892336788, 3480.3105662226],
    [0.00000112368, 1.38571949827, 454.9093665273],
    [0.00000080167, 5.77678323324, 1994.3304451574],
    [0.00000110561, 1.24589461347, 2221.856634597],
    [0.00000078496, 4.87073041736, 220.4126424388],
    [0.0000008179, 4.78672978899, 3377.217792004],
    [0.00000073469, 5.6637655659, 3053.7123753466],
    [0.00000075246, 1.0287510664, 2641.3412784722],
    [0.00000072249, 1.22468306355, 1148.2476104062],
    [0.00000061864, 4.36135344468, 3583.4033404412],
    [0.00000063725, 4.77992486302, 2207.6295405954],
    [0.00000062107, 5.94205999623, 6151.533888305],
    [0.00000049708, 5.52317221345, 2310.722314814],
    [0.00000052924, 0.94072107524, 1464.6394800628],
    [0.00000063363, 1.03914861093, 2538.2485042536],
    [0.00000047345, 3.45715892481, 19896.8801273274],
    [0.00000049932, 0.70246321976, 2957.7331481288],
    [0.00000047259, 3.34778571643, 3796.7024358792],
    [0.00000044093, 5.39807196145, 3370.1042450032],
    [0.00000045846, 4.53531578831, 3693.6096616606],
    [0.00000056152, 1.83114418643, 1289.9465010146],
    [0.00000049228, 3.01111684352, 1485.9801210652],
    [0.00000043189, 3.21651841503, 1439.5096981492],
    [0.00000041475, 5.21105528967, 2281.2304965106],
    [0.00000044074, 2.78188864378, 1802.3719907218],
    [0.00000037702, 0.66111466316, 1781.0313497194],
    [0.00000034185, 5.82966708065, 3.1813937377],
    [0.00000033532, 4.12387772585, 3899.7952100978],
    [0.00000036506, 3.06287773276, 302.164775655],
    [0.0000004259, 3.18637196282, 1169.5882514086],
    [0.00000031688, 4.64700891265, 2524.021410252],
    [0.00000032358, 0.39399849431, 3274.1250177854],
    [0.00000030118, 5.27511473399, 2627.1141844706],
    [0.00000034876, 5.93170865813, 453.424893819],
    [0.00000035752, 3.20896627905, 305.3461693927],
    [0.00000036284, 0.84773574042, 2854.6403739102],
    [0.00000038527, 5.62979784844, 1819.6374661092],
    [0.00000034529, 2.53991668951, 2118.7638603784],
    [0.00000028927, 3.62246212948, 77734.01845962799],
    [0.0000003113, 3.455155524, 25028.521211385],
    [0.00000026189, 5.13588348543, 3686.4961146598],
    [0.00000025406, 4.28659258497, 4010.0015313172],
    [0.00000026151, 0.38552860093, 2097.423219376],
    [0.00000032686, 4.71840623053, 1474.6737883704],
    [0.0000002382, 0.46580774731, 4694.0029547076],
    [0.00000030151, 4.33877010935, 760.25553592],
    [0.00000023208, 3.15851291057, 4113.0943055358],
    [0.00000024987, 2.29890909468, 2435.155730035],
    [0.00000020799, 1.87894390891, 8624.2126509272],
    [0.00000020526, 0.09812443992, 3590.516887442],
    [0.00000018426, 0.88362785829, 430.5303441391],
    [0.00000018091, 3.89154437279, 4216.1870797544],
    [0.00000022266, 1.02834321182, 5760.4984318976],
    [0.00000020864, 0.67032686103, 3171.0322435668],
    [0.00000017885, 5.03324303412, 2943.5060541272],
    [0.00000021719, 4.41493805154, 5746.271337896],
    [0.00000020465, 2.45142857661, 9690.7081281172],
    [0.00000017705, 0.11369776398, 2413.8150890326],
    [0.00000019924, 5.83802658909, 9676.4810341156],
    [0.00000015404, 4.58732908167, 2840.4132799086],
    [0.00000015408, 4.87708307484, 4002.8879843164],
    [0.00000017084, 3.73432576038, 88.865680217],
    [0.00000017248, 2.04622704184, 2751.5475996916],
    [0.00000019919, 1.56407123613, 491.5579294568],
    [0.00000016705, 2.86895605544, 39.3568759152],
    [0.00000014213, 6.18252047607, 853.196381752],
    [0.00000013939, 4.04089362851, 4326.3934009738],
    [0.00000015898, 2.17475469653, 984.6003316219],
    [0.00000012778, 6.09471640849, 3906.9087570986],
    [0.00000016459, 3.23781835413, 1744.8558675419],
    [0.00000015562, 2.45893409217, 355.7487455718],
    [0.0000001162, 1.06276880055, 114.1384744825],
    [0.00000013626, 2.58065763667, 628.8515860501],
    [0.00000011417, 2.9822217866, 4429.4861751924],
    [0.00000012097, 0.50357206368, 3487.4241132234],
    [0.00000010936, 3.68942453074, 142.4496501338],
    [0.00000011729, 6.12863706598, 2730.2069586892],
    [0.00000010433, 4.79841750311, 3259.8979237838],
    [0.00000012584, 4.62439889631, 1894.4190646765],
    [0.00000010242, 6.11563596935, 11506.7697697936],
    [0.00000011481, 1.98602848553, 217.2312487011],
    [0.00000009719, 3.66465813939, 4532.578949411],
    [0.00000011432, 1.80309123704, 3067.9394693482],
    [0.00000009625, 0.56157476363, 746.9222137957],
    [0.00000009768, 5.8263947974, 99.1606209555],
    [0.00000011619, 5.69250464582, 636.7158925763],
    [0.00000012091, 3.88630690351, 908.3342603463],
    [0.00000012046, 4.85936381801, 911.3032057629],
    [0.00000010403, 3.50683134462, 1512.8068240082],
    [0.00000011521, 5.7365032186, 1215.1649024473],
    [0.00000008986, 4.62160166948, 4319.279853973],
    [0.00000009921, 6.21054354232, 1066.49547719],
    [0.0000000925, 5.91235319223, 1382.8873468466],
    [0.00000007826, 0.73449767909, 721.6494195302],
    [0.00000009338, 2.32340784173, 945.2434557067],
    [0.00000007825, 5.8152904155, 4223.3006267552],
    [0.00000007697, 5.85936382694, 21.3406410024],
    [0.00000009506, 4.40173378662, 621.7380390493],
    [0.00000008133, 0.27645942511, 750.1036075334],
    [0.00000007579, 3.79855236511, 4642.7852706304],
    [0.0000000765, 4.63057067152, 3156.8051495652],
    [0.00000008774, 3.84389357447, 643.8294395771],
    [0.00000007305, 1.03690939571, 405.2575498736],
    [0.00000006964, 0.39002600211, 103821.92160120218],
    [0.00000007621, 5.86387601688, 3046.5988283458],
    [0.00000006918, 0.46006975698, 1038.0412891868],
    [0.00000007091, 0.34286190489, 3803.81598288],
    [0.00000007362, 1.56404663203, 3384.3313390048],
    [0.00000006368, 6.28073707476, 9492.1463150048],
    [0.0000000862, 0.76759653226, 2274.5468326365],
    [0.00000006482, 4.9966755999, 330.6189636582],
    [0.00000007808, 5.42105617645, 953.1077622329],
    [0.00000007919, 2.21429296523, 672.1406152284],
    [0.00000005989, 4.57174874222, 3576.2897934404],
    [0.00000006202, 0.2203915904, 51116.4243529592],
    [0.00000005887, 0.90065180687, 423.4167971383],
    [0.00000005636, 2.81975231705, 4745.878044849],
    [0.00000005506, 0.19631556532, 1354.4331588434],
    [0.00000005203, 3.44352591826, 4848.9708190676],
    [0.00000005921, 3.46795334217, 960.2213092337],
    [0.00000005176, 0.23148311443, 1063.3140834523],
    [0.00000005105, 6.24255842465, 629.6023455755],
    [0.00000006661, 5.74847985419, 2.4476805548],
    [0.00000005199, 4.36941564506, 4635.6717236296],
    [0.00000006569, 5.3210797615, 1699.2792165032],
    [0.00000006036, 2.04561576627, 1261.6353253633],
    [0.0000000546, 4.82279875759, 2015.6710861598],
    [0.000000048, 2.04251670068, 635.9651330509],
    [0.00000005146, 2.23628270233, 107.0249274817],
    [0.0000000555, 4.99123055275, 1279.794572628],
    [0.00000006228, 4.11075770808, 938.1299087059],
    [0.0000000617, 0.75818984791, 230.5645708254],
    [0.00000005378, 1.72361731698, 533.6231183577],
    [0.00000004722, 5.54164637327, 4539.6924964118],
    [0.00000004548, 3.11686975156, 536.8045120954],
    [0.00000004535, 5.65862298198, 408.4389436113],
    [0.00000004866, 5.60255296295, 3362.9906980024],
    [0.00000004556, 4.37737608192, 2332.0629558164],
    [0.00000004317, 0.5600796603, 739.8086667949],
    [0.00000004257, 0.00128405778, 934.9485149682],
    [0.00000004203, 3.42535467102, 458.8415197904],
    [0.0000000557, 6.01966289498, 35.4247226521],
    [0.00000004204, 0.18310719992, 4120.2078525366],
    [0.00000004638, 1.32995270506, 3700.7232086614],
    [0.00000004203, 6.22460955336, 944.9828232758],
    [0.00000004811, 4.75151028087, 1596.1864422846],
    [0.00000004092, 5.92788935179, 26617.5941066688],
    [0.00000004639, 5.25739725947, 963.4027029714],
    [0.0000000407, 6.22381251339, 1670.8250285],
    [0.00000004087, 3.55994428428, 4959.177140287],
    [0.00000004827, 2.90898924801, 902.7051860538],
    [0.00000004164, 4.46123778675, 70.8494453042],
    [0.00000003853, 4.73519636358, 227.5261894396],
    [0.00000004805, 5.14812155479, 1269.4996318895],
    [0.00000004042, 3.84912446585, 415.5524906121],
    [0.00000005117, 1.72918539323, 5120.6011455836],
    [0.00000004543, 6.03897972941, 2349.3284312038],
    [0.00000003737, 2.60661324384, 19367.1891622328],
    [0.00000005036, 0.94179262275, 494.2662424425],
    [0.0000000454, 5.82606967446, 916.9322800554],
    [0.00000003698, 3.99044848604, 2648.454825473],
    [0.00000004446, 1.97072870142, 988.532484885],
    [0.00000004933, 0.01215597929, 1966.2317178272],
    [0.00000003512, 5.97523151493, 945.9942152321],
    [0.00000003783, 3.13358088248, 1276.6131788903],
    [0.00000004686, 4.64796297712, 2199.7652340692],
    [0.00000004752, 0.55790270916, 92.0470739547],
    [0.00000003389, 4.35467462949, 3892.681663097],
    [0.00000004583, 3.15188515817, 9050.8108418032],
    [0.00000003267, 5.64022843639, 10.2949407385],
    [0.00000004346, 6.26385753928, 1366.2125722902],
    [0.0000000424, 1.98085282448, 685.4739373527],
    [0.0000000419, 1.51118651528, 833.552661779],
    [0.00000003206, 5.35223649369, 724.8308132679],
    [0.00000003161, 1.77393470551, 952.3570027075],
    [0.00000004157, 2.28461894859, 191.9584544356],
    [0.00000004133, 0.85677638335, 1670.0742689746],
    [0.00000004223, 4.76161820467, 3473.1970192218],
    [0.00000003196, 6.17558280711, 1251.3403846248],
    [0.00000003053, 0.24732184203, 1056.2005364515],
    [0.00000003455, 1.47468744617, 850.0149880143],
    [0.00000003471, 3.42546018452, 731.9443602687],
    [0.00000003748, 1.80623905104, 569.0478410098],
    [0.0000000363, 4.53472408208, 1912.5783119412],
    [0.00000003255, 1.85923409837, 5230.807466803],
    [0.00000002887, 3.64497333635, 2964.8466951296],
    [0.0000000307, 4.80580482715, 1751.539531416],
    [0.00000003833, 5.29397057339, 1363.2436268736],
    [0.00000003482, 1.76858598544, 1578.0271950199],
    [0.00000002986, 4.12053727941, 4952.0635932862],
    [0.00000003824, 3.79874666586, 1254.5217783625],
    [0.000000028, 2.67135305894, 5062.2699145056],
    [0.00000002842, 5.97672293503, 1987.2168981566],
    [0.00000003279, 1.22995193291, 18.1592472647],
    [0.00000002761, 6.18389165135, 1379.7059531089],
    [0.00000002776, 3.22844463468, 5165.3626887242],
    [0.00000002994, 4.55587146595, 1357.6145525811],
    [0.00000003058, 5.34470198135, 3679.382567659],
    [0.00000002813, 5.27289494778, 4856.0843660684],
    [0.00000003401, 1.95720902371, 508.3503240922],
    [0.00000002723, 2.21325068269, 280.9671470045],
    [0.00000002871, 1.10129132121, 4017.115078318],
    [0.00000002908, 3.28192492623, 9161.0171630226],
    [0.00000002564, 0.88043974222, 5621.8429232104],
    [0.00000002518, 0.01978537253, 4436.5997221932],
    [0.00000002771, 0.63495406351, 618.5566453116],
    [0.00000002705, 4.87797418465, 3789.5888888784],
    [0.00000003058, 1.66752578824, 824.7421937488],
    [0.00000002461, 3.15705144585, 775.233389447],
    [0.00000002594, 4.92079708288, 106.2741679563],
    [0.00000002516, 1.01763510844, 1166.4068576709],
    [0.00000002649, 3.19426350823, 1048.3362299253],
    [0.00000002808, 4.8810657644, 1585.8915015461],
    [0.00000002757, 3.3258483685, 422.6660376129],
    [0.00000002222, 5.71038132391, 1262.3860848887],
    [0.00000002325, 1.06791172951, 18319.5365848796],
    [0.00000002749, 3.0085118999, 5856.4776591154],
    [0.00000002231, 5.0434512394, 1041.2226829245],
    [0.00000002965, 0.68336796696, 810.6581120991],
    [0.00000002908, 5.40286816711, 10742.9765113056],
    [0.00000002201, 3.31814696811, 69.1525242748],
    [0.00000002159, 3.32280357783, 3281.2385647862],
    [0.00000002312, 2.80725336395, 1593.0050485469],
    [0.00000002205, 4.77899177146, 78.7137518304],
    [0.00000002187, 3.32549434403, 5275.5690099436],
    [0.00000002292, 4.07039209496, 5216.5803728014],
    [0.00000002623, 1.3795645117, 1141.1340634054],
    [0.00000002402, 1.70342814038, 885.4397106664],
    [0.00000002122, 2.50127144645, 99.9113804809],
    [0.00000002252, 3.59635501322, 1969.2006632438],
    [0.00000002544, 1.73057719779, 1304.9243545416],
    [0.0000000207, 6.23189210416, 1372.5924061081],
    [0.00000002315, 1.20203635564, 416.3032501375],
    [0.00000002631, 4.31072863402, 2228.9701815978],
    [0.00000002201, 3.48299839022, 67.6680515665],
    [0.00000002536, 4.43187515714, 9786.687355335],
    [0.00000002509, 4.63415133524, 173.9422195228],
    [0.00000002187, 5.18406217364, 10977.078804699],
    [0.00000002434, 0.35079293465, 378.6432952517],
    [0.00000001928, 1.50248737711, 1268.7488723641],
    [0.00000002254, 5.07607766079, 2004.364753465],
    [0.00000002049, 5.49136359092, 9146.790069021],
    [0.00000001883, 4.89754507232, 4105.980758535],
    [0.00000002549, 5.57462077021, 836.5216071956],
    [0.00000001851, 5.23291927218, 14.977853527],
    [0.00000001896, 5.7390649105, 2303.6087678132],
    [0.00000001893, 4.14899867422, 4209.0735327536],
    [0.00000002521, 2.2388176426, 210.1177017003],
    [0.00000001789, 4.568684044, 518.6452648307],
    [0.00000002334, 1.08112856702, 981.6313862053],
    [0.00000002152, 1.10028270784, 1457.525933062],
    [0.00000002024, 0.57252523382, 33.9402499438],
    [0.00000002111, 2.48447719122, 5650.2921106782],
    [0.00000002121, 5.91519094891, 604.4725636619],
    [0.00000001728, 3.44077476115, 129909.82474277639],
    [0.00000001756, 0.65855434648, 1482.7987273275],
    [0.00000001876, 0.6523144411, 195.1398481733],
    [0.00000001732, 3.10734315627, 24498.8302462904],
    [0.00000001895, 5.09039337189, 3995.7744373156],
    [0.0000000178, 4.66833990833, 245.5424243524],
    [0.00000001753, 0.87834706358, 4333.5069479746],
    [0.00000002015, 2.58518031685, 2803.8079146044],
    [0.00000002006, 5.48171498644, 2818.035008606],
    [0.00000002002, 5.91666196785, 32.2433289144],
    [0.00000001703, 3.87500603444, 5268.4554629428],
    [0.0000000193, 3.90679935252, 9580.5018068978],
    [0.00000002054, 0.04198440965, 1567.7322542814],
    [0.00000002214, 3.48859680258, 1570.9136480191],
    [0.00000001756, 0.91144565367, 732.6951197941],
    [0.00000001742, 3.09201809145, 5.6290742925],
    [0.00000001657, 5.00840028602, 5172.476235725],
    [0.00000001561, 3.02216975831, 3597.6304344428],
    [0.00000001717, 1.42901902101, 1371.8416465827],
    [0.00000001951, 6.2732839403, 11.0457002639],
    [0.00000001839, 3.01575194265, 739.0579072695],
    [0.00000001592, 0.35944334142, 1884.124123938],
    [0.0000000154, 2.89404194109, 1091.6252591036],
    [0.00000001519, 6.13283952885, 4752.9915918498],
    [0.00000001515, 0.51646748603, 2200.5159935946],
    [0.000000021, 0.59799222992, 6386.16862421],
    [0.00000001927, 3.36884514005, 1140.38330388],
    [0.00000001481, 4.84630954442, 202.2533951741],
    [0.00000001513, 1.89310009184, 597.3590166611],
    [0.00000001523, 4.70443438509, 209.3669421749],
    [0.00000001462, 0.13678678744, 4164.311989613],
    [0.00000001565, 0.62163270638, 433.7117378768],
    [0.00000001461, 5.86471537278, 1696.0978227655],
    [0.00000002026, 5.23576691306, 124.433415221],
    [0.00000001798, 3.67898921875, 25565.3257234804],
    [0.00000001478, 3.01970390528, 5481.7545583808],
    [0.00000001912, 2.19677438607, 2729.4561991638],
    [0.00000001742, 2.02475109819, 5.4166259714],
    [0.00000001539, 1.48365548799, 381.6122406683],
    [0.00000001575, 2.55753165828, 4.192785694],
    [0.00000001948, 2.08193300335, 282.4516197128],
    [0.00000001748, 0.78240414927, 25551.09862947879],
    [0.00000001411, 3.27191734053, 77204.32749453338],
    [0.00000001645, 0.30994053925, 0.9632078465],
    [0.00000001404, 2.53628007887, 5378.6617841622],
    [0.00000001794, 0.33501321174, 827.9235874865],
    [0.00000001632, 0.12767482689, 696.5196376166],
    [0.00000001943, 2.02090955072, 10316.3783204296],
    [0.00000001382, 4.66904215239, 1021.2488945514],
    [0.00000001687, 0.82549938238, 1773.9178027186],
    [0.00000001358, 5.94782159097, 1688.9842757647],
    [0.00000001459, 1.53364869912, 1201.831580323],
    [0.00000001363, 3.56091601113, 5333.9002410216],
    [0.00000001337, 5.45408064595, 1578.7779545453],
    [0.0000000146, 3.38383571926, 312.4597163935],
    [0.00000001323, 4.82529778882, 4422.3726281916],
    [0.00000001419, 0.47753684223, 2516.9078632512],
    [0.00000001817, 4.12073582938, 2545.3620512544],
    [0.00000001732, 0.4253008595, 1127.0499817557],
    [0.00000001374, 2.4881789256, 1909.3969182035],
    [0.00000001332, 1.43060416427, 252.6559713532],
    [0.00000001676, 2.91490165055, 1288.4620283063],
    [0.00000001583, 4.6209975214, 1902.2833712027],
    [0.00000001247, 1.53124493622, 8094.5216858326],
    [0.00000001251, 1.60763339924, 387.2413149608],
    [0.00000001453, 1.49493176927, 1621.3162241982],
    [0.00000001572, 1.8938755703, 526.5095713569],
    [0.00000001219, 4.98519991779, 9264.1099372412],
    [0.00000001225, 0.78458730465, 2.9207613068],
    [0.000000015, 3.51120868276, 842.1506814881],
    [0.00000001193, 0.31489702527, 1799.1905969841],
    [0.00000001216, 5.51283575358, 2620.0006374698],
    [0.00000001286, 0.62936069149, 1049.0869894507],
    [0.00000001431, 0.23345234372, 1012.9115072732],
    [0.00000001162, 3.0955087901, 5591.9608796002],
    [0.00000001124, 1.2360142405, 1585.1407420207],
    [0.00000001194, 3.2098279042, 295.0512286542],
    [0.00000001346, 2.5483553663, 1681.1199692385],
    [0.00000001095, 2.73496674367, 3914.0223040994],
    [0.00000001344, 3.27172540016, 976.0023119128],
    [0.00000001338, 1.16811164765, 2804.2377977311],
    [0.00000001233, 0.3375358579, 2833.2997329078],
    [0.00000001175, 4.63569329422, 327.4375699205],
    [0.00000001095, 3.85306857416, 28.3111756513],
    [0.00000001398, 2.26289539685, 2124.9836355019],
    [0.00000001345, 5.99491827698, 24.3790223882],
    [0.00000001346, 3.29739850229, 1887.3055176757],
    [0.0000000128, 6.1642027762, 990.2294059144],
    [0.00000001272, 0.55471847109, 2090.3096723752],
    [0.00000001213, 2.72300163359, 1055.4497769261],
    [0.0000000122, 3.56609581895, 4.665866446],
    [0.000000014, 4.59621464121, 5436.9930152402],
    [0.00000001159, 4.83978630304, 4312.1663069722],
    [0.00000001059, 0.6612287633, 4649.8988176312],
    [0.00000001073, 0.32160088989, 511.5317178299],
    [0.00000001046, 3.95692692902, 4525.4654024102],
    [0.00000001041, 3.27233969011, 31.019488637],
    [0.00000001315, 1.37132632517, 1821.1219388175],
    [0.00000000971, 2.63547833204, 1408.0171287602],
    [0.00000001278, 3.212972142, 761.7400086283],
    [0.00000001179, 1.23978452018, 2210.8109343331],
    [0.00000000973, 4.44515791501, 1674.0064222377],
    [0.00000001234, 3.94951384005, 2861.753920911],
    [0.00000001299, 0.19126011466, 277.0349937414],
    [0.00000001299, 6.05921038102, 2654.6746005965],
    [0.00000000964, 1.54006563973, 913.7508863177],
    [0.00000000966, 4.7477830131, 5488.8681053816],
    [0.00000001082, 2.82523024684, 292.0128472684],
    [0.0000000092, 5.95424186731, 5069.3834615064],
    [0.00000001259, 6.01905342793, 9367.2027114598],
    [0.00000001265, 0.73220955253, 457.617679513],
    [0.00000001258, 0.30360908245, 17260.1546546904],
    [0.00000000966, 3.63292819263, 5584.8473325994],
    [0.00000000911, 4.69271572749, 4738.7644978482],
    [0.00000001204, 3.05051144067, 593.426863398],
    [0.00000001099, 4.41529830412, 1438.0252254409],
    [0.00000000876, 4.84318127763, 6812.766815086],
    [0.00000001126, 1.61130517038, 842.9014410135],
    [0.00000000902, 4.3161485319, 561.934294009],
    [0.00000000861, 5.6720237944, 2005.3761454213],
    [0.00000000962, 1.15246838309, 1159.2933106701],
    [0.0000000087, 1.36806464083, 1518.2234499796],
    [0.00000001, 0.14899963994, 3149.6916025644],
    [0.00000000912, 2.4341648701, 1997.5118388951],
    [0.00000001118, 0.43046832675, 1818.1529934009],
    [0.00000000901, 0.35228964981, 1365.4788591073],
    [0.00000000865, 0.69627364686, 771.3012361839],
    [0.00000000842, 1.41844641942, 1436.5407527326],
    [0.0000000088, 1.54493795983, 121.2520214833],
    [0.0000000092, 2.47212945902, 203.0041546995],
    [0.00000001097, 0.86021028995, 6069.7767545534],
    [0.00000000792, 1.05487472852, 1901.5326116773],
    [0.00000000787, 6.2695809666, 2115.5824666407],
    [0.00000000777, 5.20795329382, 1895.1698242019],
    [0.00000001038, 4.66164169812, 155.7829722581],
    [0.000000008, 2.17520025318, 2225.7887878601],
    [0.00000000998, 6.24875024762, 630.3360587584],
    [0.00000001, 0.17262287602, 1443.4418514123],
    [0.00000000785, 2.81758285317, 5798.1464280374],
    [0.0000000079, 0.45058053139, 149.5631971346],
    [0.00000001025, 5.78989490342, 46.470422916],
    [0.00000000772, 1.84427105786, 6172.869528772],
    [0.00000000748, 2.45792653612, 4230.414173756],
    [0.00000000755, 5.54818705808, 2012.4896924221],
    [0.00000000927, 0.2879632138, 2406.7015420318],
    [0.0000000103, 6.11237054691, 1329.3033769298],
    [0.00000001015, 2.2831310338, 9999.986450773],
    [0.00000000838, 2.12784595408, 306.830642101],
    [0.00000000905, 5.4196191589, 758.7710632117],
    [0.00000000826, 1.26381665595, 1937.7080938548],
    [0.00000000868, 4.36918437537, 2218.6752408593],
    [0.00000000754, 5.30117331233, 2936.3925071264],
    [0.00000000712, 4.75655159355, 2424.1100297711],
    [0.0000000098, 1.1196595278, 8432.7643848156],
    [0.00000000836, 3.7927262267, 3178.1457905676],
    [0.00000000714, 3.2691733855, 10103.0792249916],
    [0.00000000977, 1.19410032537, 177.8743727859],
    [0.00000000825, 2.1773024243, 4804.209275927],
    [0.00000000769, 0.82860374929, 1475.6851803267],
    [0.00000000913, 2.05993975542, 635.231419868],
    [0.00000000766, 5.12436622747, 224.3447957019],
    [0.00000000712, 2.41248184387, 5695.0536538188],
    [0.00000000681, 4.20708053599, 81.7521332162],
    [0.00000000693, 1.99499360988, 244.318584075],
    [0.00000000693, 4.1644630925, 3870.3033917944],
    [0.00000000679, 5.75413909919, 632.831923423],
    [0.00000000678, 2.55651313265, 632.7355552034],
    [0.00000000886, 1.82238326118, 598.8434893694],
    [0.00000000657, 2.37367073635, 319.5732633943],
    [0.00000000777, 1.01925716376, 806.725958836],
    [0.00000000818, 4.27845786085, 303.8616966844],
    [0.00000000749, 1.31537681277, 483.2205421786],
    [0.00000000772, 3.55414750538, 1158.5425511447],
    [0.00000000753, 3.30143676774, 1474.9344208013],
    [0.00000000862, 2.56128870381, 1514.2912967165],
    [0.0000000065, 2.11027295187, 490.3340891794],
    [0.00000000807, 4.76421492426, 1595.2926704073],
    [0.00000000633, 0.15123614962, 59.8037450403],
    [0.00000000644, 1.33919229635, 1230.1427559743],
    [0.00000000729, 5.42762221261, 631.8205314667],
    [0.00000000779, 0.0503228989, 1151.4290041439],
    [0.00000000692, 0.33525393492, 12832.7587417046],
    [0.00000000716, 2.88279619064, 633.7469471597],
    [0.00000000743, 3.59446583789, 8734.4189721466],
    [0.00000000635, 0.44979587894, 4966.2906872878],
    [0.00000000768, 6.21886239343, 3466.083472221],
    [0.00000000613, 2.87071351553, 5908.3527492568],
    [0.00000000609, 2.38043498384, 1724.4089984168],
    [0.0000000085, 0.33415120267, 6702.5604938666],
    [0.00000000637, 1.23149503907, 799.6124118352],
    [0.00000000674, 4.22048506199, 525.7588118315],
    [0.00000000665, 1.01828211608, 495.7507151508],
    [0.000000007, 4.59300117681, 4628.5581766288],
    [0.00000000616, 4.15230916272, 1990.3982918943],
    [0.00000000611, 4.52355677632, 5055.1563675048],
    [0.00000000602, 2.87435392854, 505.3119427064],
    [0.00000000592, 0.30561269665, 153.4953503977],
    [0.00000000605, 1.84073729745, 18837.49819713819],
    [0.00000000568, 2.03829964667, 5092.1519581158],
    [0.00000000652, 2.85717329186, 52705.49724824299],
    [0.00000000672, 1.60842392108, 558.0021407459],
    [0.00000000724, 2.73107801928, 6.1503391543],
    [0.00000000561, 3.89161061855, 437.6438911399],
    [0.00000000788, 1.75711854166, 10632.7701900862],
    [0.0000000057, 3.99406518584, 878.3261636656],
    [0.00000000764, 1.59133429577, 2457.789647284],
    [0.00000000608, 0.07956989125, 1681.8707287639],
    [0.00000000573, 3.12199693259, 384.0599212231],
    [0.00000000557, 5.76663434373, 5385.775331163],
    [0.00000000545, 3.03395552619, 7.1617311106],
    [0.0000000065, 3.00933490807, 1791.3262904579],
    [0.0000000072, 2.00842278103, 415.2918581812],
    [0.00000000663, 6.03367788193, 1467.8208738005],
    [0.00000000581, 6.10329378473, 7.065362891],
    [0.0000000057, 6.01272381882, 1144.3154571431],
    [0.00000000532, 5.40437344396, 2321.7680150779],
    [0.00000000583, 0.52531121983, 1792.0770499833],
    [0.00000000557, 4.49080239056, 5805.2599750382],
    [0.00000000688, 3.48276966366, 456.3938392356],
    [0.00000000655, 0.02521843889, 2723.0934116884],
    [0.00000000573, 3.78098434354, 4841.8572720668],
    [0.00000000681, 5.97935714444, 946.727928415],
    [0.00000000723, 0.46911049521, 774.0095491696],
    [0.00000000646, 5.27341127424, 1440.9941708575],
    [0.00000000569, 3.64237619317, 3494.5376602242],
    [0.00000000562, 2.56052616789, 166.828672522],
    [0.00000000513, 1.2045798783, 1834.6153196362],
    [0.00000000506, 5.95272966269, 2431.9743362973],
    [0.00000000698, 2.91428554876, 2203.6973873323],
    [0.000000005, 2.18879312488, 4546.8060434126],
    [0.00000000544, 3.39443682012, 5901.239202256],
    [0.00000000529, 5.79061232189, 113.3877149571],
    [0.00000000582, 1.33813166398, 4590.910180489],
    [0.00000000527, 0.93289956485, 1116.0042814918],
    [0.00000000631, 4.61775737734, 898.7730327907],
    [0.00000000583, 2.15978404009, 519.3960243561],
    [0.0000000054, 4.7004666161, 1297.0600480154],
    [0.00000000634, 1.03004852704, 2527.2028039897],
    [0.00000000651, 6.17726000902, 72.0732855816],
    [0.00000000572, 2.01621488273, 2313.9037085517],
    [0.00000000617, 1.79801994089, 951.6232895246],
    [0.00000000469, 4.53299385868, 366.7944458357],
    [0.0000000049, 3.86545562777, 2042.4977891028],
    [0.0000000061, 4.32144181294, 1743.3713948336],
    [0.00000000476, 3.02598667546, 385.5443939314],
    [0.00000000615, 5.72889531753, 647.0108333148],
    [0.00000000476, 0.79825522076, 5017.508371365],
    [0.00000000535, 1.13325428298, 63.7358983034],
    [0.00000000458, 2.29405203458, 949.12742486],
    [0.00000000459, 5.49155116607, 949.2237930796],
    [0.00000000506, 3.01131925299, 429.0458714308],
    [0.00000000455, 4.46437878966, 395.105621487],
    [0.00000000569, 6.20921351938, 1759.8337210689],
    [0.00000000459, 1.86995474827, 2542.1806575167],
    [0.00000000446, 2.37931582219, 31.492569389],
    [0.0000000044, 4.9736635846, 2211.5616938585],
    [0.00000000609, 0.87192385118, 1087.6931058405],
    [0.00000000467, 6.10100316898, 1226.2106027112],
    [0.00000000508, 2.75507977255, 8521.1198767086],
    [0.00000000566, 5.9919377954, 3782.4753418776],
    [0.00000000471, 4.8437694956, 540.7366653585],
    [0.00000000493, 5.16382854767, 948.2124011233],
    [0.0000000058, 5.53819752345, 362.8622925726],
    [0.00000000437, 0.20833773635, 155997.72788435058],
    [0.00000000482, 5.66714420182, 1784.2127434571],
    [0.00000000484, 2.62003729986, 950.1388168163],
    [0.00000000453, 5.10819476343, 3252.784376783],
    [0.00000000467, 1.03701486521, 2254.0999635114],
    [0.00000000483, 5.80816978247, 1812.5239191084],
    [0.00000000431, 3.06171231534, 100.6450936638],
    [0.00000000428, 2.21892763752, 8947.7180675846],
    [0.00000000535, 3.0551631104, 946.4672959841],
    [0.00000000555, 5.77916610299, 1645.6952465864],
    [0.000000005, 4.4604185322, 1173.5204046717],
    [0.00000000561, 5.11013955826, 906.849787638],
    [0.00000000413, 1.07437209714, 1546.5346256309],
    [0.00000000484, 2.19022920143, 1688.2335162393],
    [0.0000000054, 5.95385287998, 610.6923387854],
    [0.00000000452, 2.81349115041, 611.4430983108],
    [0.0000000048, 2.73385602642, 2107.7181601145],
    [0.00000000502, 1.96323086728, 1282.8329540138],
    [0.00000000399, 3.57368866246, 754.0357607965],
    [0.00000000543, 5.54393391095, 2125.8774073792],
    [0.00000000417, 2.6219507337, 6114.538297694],
    [0.000000004, 3.28078650107, 421.93232443],
    [0.00000000415, 5.72977915978, 1460.7073267997],
    [0.00000000464, 4.1272380267, 2535.0671105159],
    [0.00000000457, 0.37405847744, 2495.9226829218],
    [0.00000000422, 0.23452051117, 2108.4689196399],
    [0.00000000408, 0.1272112055, 8.0767548473],
    [0.00000000451, 5.54745097218, 373.0142209592],
    [0.00000000517, 2.66301855959, 1473.1893156621],
    [0.00000000384, 6.10981721793, 432.0148168474],
    [0.00000000378, 2.12869244749, 2040.8008680734],
    [0.00000000386, 2.59152092621, 623.2225117576],
    [0.00000000389, 6.28022173724, 1895.9035373848],
    [0.00000000381, 5.24000651207, 2328.8815620787],
    [0.00000000505, 3.61983518445, 1476.1582610787],
    [0.00000000468, 4.21274933221, 1489.9122743283],
    [0.00000000463, 2.62124682126, 608.404716925],
    [0.00000000382, 3.6910155294, 1194.7180333222],
    [0.00000000378, 0.24395823209, 5282.6825569444],
    [0.000000004, 4.33229783514, 5371.5482371614],
    [0.00000000489, 1.56579523423, 915.235359026],
    [0.00000000487, 5.76910609337, 1809.4855377226],
];

const A1: &[Term] = &[
    [0.00010177614, 4.46063225487, 7.1135470008],
    [0.00002974577, 2.40984161552, 419.4846438752],
    [0.00002846542, 2.88143856615, 103.0927742186],
    [0.00001611596, 2.13915074201, 735.8765135318],
    [0.00001760156, 3.67637229071, 206.1855484372],
    [0.00000975837, 4.58170505532, 110.2063212194],
    [0.00000911669, 1.87013379797, 1052.2683831884],
    [0.0000085555, 3.38594999043, 522.5774180938],
    [0.00000517951, 1.60448646183, 1368.660252845],
    [0.00000523859, 0.75151625144, 639.897286314],
    [0.00000516763, 3.1138174525, 838.9692877504],
    [0.00000382808, 4.31926485028, 14.2270940016],
    [0.00000386165, 1.3027637831, 625.6701923124],
    [0.00000354199, 0.49660286331, 956.2891559706],
    [0.00000328878, 2.79000776521, 1155.361157407],
    [0.00000293428, 1.34286451995, 1685.0521225016],
    [0.00000341707, 1.96336256481, 426.598190876],
    [0.00000270567, 2.54582180151, 412.3710968744],
    [0.00000246695, 2.85747030586, 529.6909650946],
    [0.00000264305, 1.05263137537, 942.062061969],
    [0.00000214067, 5.53818678757, 1162.4747044078],
    [0.00000208182, 4.30174453264, 95.9792272178],
    [0.00000206168, 2.26369947866, 728.762966531],
    [0.00000239651, 4.63045021564, 309.2783226558],
    [0.00000212075, 2.49433943968, 1471.7530270636],
    [0.000002392, 1.63358295843, 742.9900605326],
    [0.00000219755, 0.24168051708, 1272.6810256272],
    [0.00000170475, 5.26781891515, 1478.8665740644],
    [0.00000165019, 1.08624991779, 2001.4439921582],
    [0.00000148723, 1.99057513019, 1045.1548361876],
    [0.00000159857, 0.80737027138, 1258.4539316256],
    [0.00000191323, 0.0, 0.0],
    [0.00000135643, 2.20459172149, 1788.1448967202],
    [0.0000014372, 1.38094506019, 1059.3819301892],
    [0.00000116952, 4.99977802604, 1795.258443721],
    [0.00000130369, 6.27204880608, 1589.0728952838],
    [0.00000136554, 3.81615570234, 199.0720014364],
    [0.00000101992, 1.72318156344, 1361.5467058442],
    [0.00000100545, 2.99574130603, 213.299095438],
    [0.00000092199, 0.83464051085, 2317.8358618148],
    [0.00000090177, 0.57786931766, 1574.8458012822],
    [0.00000085654, 1.92088575545, 2104.5367663768],
    [0.00000094937, 1.08728536024, 1375.7737998458],
    [0.00000074438, 4.73384047137, 2111.6503133776],
    [0.00000086472, 3.51197906071, 515.463871093],
    [0.00000067134, 1.46051344238, 1677.9385755008],
    [0.00000075059, 6.02983478156, 1905.4647649404],
    [0.00000062491, 4.31915313222, 117.3198682202],
    [0.00000064866, 3.2283435165, 831.8557407496],
    [0.00000051198, 0.58833474473, 2634.2277314714],
    [0.00000053348, 1.64271382926, 2420.9286360334],
    [0.00000067243, 0.61946503565, 1692.1656695024],
    [0.00000048314, 0.37023735027, 1891.2376709388],
    [0.00000045305, 4.4698324117, 2428.0421830342],
    [0.00000042745, 1.20310371024, 1994.3304451574],
    [0.00000041799, 2.32160919233, 323.5054166574],
    [0.00000040929, 3.17914634152, 220.4126424388],
    [0.00000048398, 2.93482010105, 1148.2476104062],
    [0.00000053186, 0.39882687834, 846.0828347512],
    [0.00000047166, 0.27441314118, 2008.557539159],
    [0.0000004303, 5.80475880586, 2221.856634597],
    [0.00000032128, 5.25731842512, 3.9321532631],
    [0.00000032786, 1.36958230696, 2737.32050569],
    [0.00000035446, 2.65168077471, 1464.6394800628],
    [0.00000028272, 0.34760692489, 2950.619601128],
    [0.00000029282, 4.76883528874, 302.164775655],
    [0.0000002675, 4.20781266909, 2744.4340526908],
    [0.00000026484, 0.95101992572, 2310.722314814],
    [0.00000032441, 6.23509990436, 2324.9494088156],
    [0.00000024762, 0.19500189458, 2207.6295405954],
    [0.00000022802, 4.01674139656, 3.1813937377],
    [0.00000025244, 2.37256993945, 1781.0313497194],
    [0.00000020366, 1.64988351314, 5223.6939198022],
    [0.00000024155, 5.59538962868, 2538.2485042536],
    [0.00000019902, 1.10108636712, 3053.7123753466],
    [0.00000021786, 5.94560127659, 632.7837393132],
    [0.00000023761, 1.44704475668, 1485.9801210652],
    [0.00000021761, 5.92962318415, 2641.3412784722],
    [0.00000018267, 3.07286749986, 9153.9036160218],
    [0.00000019254, 2.31950484608, 1265.5674786264],
    [0.00000021413, 1.21218957693, 1802.3719907218],
    [0.00000016034, 0.70478906265, 2627.1141844706],
    [0.00000015536, 0.1127261787, 3267.0114707846],
    [0.00000015445, 3.94791525486, 3060.8259223474],
    [0.0000001722, 2.58781966182, 949.1756089698],
    [0.00000017504, 2.09737393933, 2097.423219376],
    [0.00000016795, 2.04474993028, 1581.959348283],
    [0.00000020151, 1.63334675766, 1169.5882514086],
    [0.00000015189, 5.49167720862, 88.865680217],
    [0.00000016835, 0.9656741485, 2118.7638603784],
    [0.00000012209, 0.07087444047, 2524.021410252],
    [0.00000014244, 5.63597597627, 2957.7331481288],
    [0.00000013005, 1.77143640745, 1898.3512179396],
    [0.00000011944, 0.83694282807, 3370.1042450032],
    [0.00000011847, 1.82593614882, 2413.8150890326],
    [0.00000012192, 0.71760429893, 2435.155730035],
    [0.0000001345, 5.40523908282, 2854.6403739102],
    [0.00000009514, 0.46510488877, 2943.5060541272],
    [0.00000009166, 4.15731592695, 21.3406410024],
    [0.00000008763, 3.69027856308, 3377.217792004],
    [0.00000008824, 1.89141685186, 316.3918696566],
    [0.00000008501, 6.16713146021, 3583.4033404412],
    [0.00000009376, 1.5004172491, 2214.7430875962],
    [0.00000009119, 5.35082275936, 3274.1250177854],
    [0.00000007674, 5.39974787254, 12036.4607348882],
    [0.00000007299, 2.43299379098, 721.6494195302],
    [0.00000007448, 0.17865714863, 380.12776796],
    [0.00000008402, 0.46852139035, 2751.5475996916],
    [0.00000007845, 1.55816024875, 2730.2069586892],
    [0.00000007095, 0.5769639254, 3686.4961146598],
    [0.00000006823, 2.73114584124, 405.2575498736],
    [0.00000006444, 2.15964233671, 1038.0412891868],
    [0.00000006365, 4.52511473186, 853.196381752],
    [0.00000005891, 0.02841975831, 2840.4132799086],
    [0.00000007472, 5.23575469705, 3171.0322435668],
    [0.00000006548, 5.62238661855, 5760.4984318976],
    [0.0000000642, 1.23298246283, 2531.1349572528],
    [0.00000006369, 6.10638670063, 5746.271337896],
    [0.00000005546, 0.23294955, 3259.8979237838],
    [0.00000006015, 0.7621510683, 9690.7081281172],
    [0.00000006546, 4.48324723105, 1066.49547719],
    [0.00000005847, 1.2461815994, 9676.4810341156],
    [0.00000005124, 1.89641878623, 1354.4331588434],
    [0.000000049, 3.43508686663, 3693.6096616606],
    [0.00000005726, 5.07204309919, 3590.516887442],
    [0.00000005549, 0.22392865458, 3067.9394693482],
    [0.00000004827, 4.49376160033, 6151.533888305],
    [0.00000005569, 4.83199628235, 750.1036075334],
    [0.00000005935, 4.18751294962, 1382.8873468466],
    [0.00000004636, 5.94468319736, 3899.7952100978],
    [0.00000005095, 1.29398813513, 3046.5988283458],
    [0.00000004427, 3.28280329039, 1279.794572628],
    [0.00000004456, 3.26246303219, 330.6189636582],
    [0.00000004175, 0.32099662823, 4002.8879843164],
    [0.00000004238, 0.96857555788, 2847.5268269094],
    [0.00000004536, 3.65346936673, 1699.2792165032],
    [0.00000003783, 1.64107766034, 1670.8250285],
    [0.00000004171, 5.08666566118, 3487.4241132234],
    [0.00000003831, 3.03815512202, 1596.1864422846],
    [0.00000003498, 0.49048971625, 628.8515860501],
    [0.00000003558, 3.0369094057, 227.5261894396],
    [0.00000003715, 3.55223135201, 963.4027029714],
    [0.00000003781, 3.20801185608, 2015.6710861598],
    [0.00000004349, 1.9315931778, 835.0371344873],
    [0.00000003344, 0.32034749494, 19896.8801273274],
    [0.0000000337, 1.76175487536, 629.6023455755],
    [0.00000004443, 3.98011445207, 191.9584544356],
    [0.00000003403, 3.88275333949, 10.2949407385],
    [0.00000003189, 1.67634354786, 934.9485149682],
    [0.00000003173, 0.24449460238, 635.9651330509],
    [0.00000003555, 6.2669485434, 3384.3313390048],
    [0.00000003182, 0.00955306011, 3576.2897934404],
    [0.00000003515, 5.31488707271, 51646.11531805379],
    [0.00000003534, 4.79821749888, 3906.9087570986],
    [0.00000003114, 2.80243924285, 2332.0629558164],
    [0.00000002952, 1.49462848134, 636.7158925763],
    [0.00000002705, 3.18251414749, 4010.0015313172],
    [0.00000003252, 1.0334229792, 3362.9906980024],
    [0.00000003637, 3.65907851637, 508.3503240922],
    [0.00000002884, 2.8116077235, 1912.5783119412],
    [0.00000002935, 0.09920395743, 3156.8051495652],
    [0.00000002639, 1.39426210957, 1987.2168981566],
    [0.00000002521, 5.72870654541, 4216.1870797544],
    [0.00000002484, 2.43905221483, 2648.454825473],
    [0.0000000272, 0.70732654495, 3163.918696566],
    [0.00000002385, 0.22333325481, 945.2434557067],
    [0.00000003269, 3.37169786501, 824.7421937488],
    [0.00000002316, 1.49685270608, 945.9942152321],
    [0.00000002436, 0.06899103842, 4319.279853973],
    [0.00000002362, 1.57797365902, 1251.3403846248],
    [0.00000002356, 4.95488580626, 3803.81598288],
    [0.00000002404, 2.79931795446, 423.4167971383],
    [0.00000002185, 6.09425831434, 2281.2304965106],
    [0.00000002733, 0.70600664507, 536.8045120954],
    [0.00000002091, 6.25864693534, 952.3570027075],
    [0.00000002803, 3.0847184118, 1141.1340634054],
    [0.00000002372, 1.30773793071, 4694.0029547076],
    [0.00000001979, 1.22906329002, 953.1077622329],
    [0.00000002224, 6.03222156982, 3700.7232086614],
    [0.00000001907, 2.10721699109, 2964.8466951296],
    [0.00000002149, 4.52850596102, 4223.3006267552],
    [0.00000002064, 2.59263280988, 2228.9701815978],
    [0.00000001903, 2.25898323935, 1439.5096981492],
    [0.00000001998, 4.26531893403, 305.3461693927],
    [0.00000002085, 2.72251430087, 8624.2126509272],
    [0.00000001822, 0.48594257032, 453.424893819],
    [0.00000001767, 5.62498908902, 18.1592472647],
    [0.000000018, 6.0795728345, 3892.681663097],
    [0.00000001935, 4.61475835418, 902.7051860538],
    [0.00000002298, 2.80609890283, 1457.525933062],
    [0.00000002043, 0.7764462814, 3679.382567659],
    [0.00000001758, 1.1569919151, 2303.6087678132],
    [0.0000000196, 2.33107866165, 618.5566453116],
    [0.00000001948, 3.4690457464, 124.433415221],
    [0.00000001746, 2.47549616835, 739.8086667949],
    [0.00000001813, 4.12239932806, 916.9322800554],
    [0.0000000166, 4.29595644773, 217.2312487011],
    [0.00000001707, 0.44932275633, 3480.3105662226],
    [0.00000001532, 4.14474851695, 107.0249274817],
    [0.00000001604, 2.08457014237, 77734.01845962799],
    [0.00000001513, 4.22909651802, 99.9113804809],
    [0.00000001504, 6.23525219491, 1261.6353253633],
    [0.00000001558, 4.30091782404, 25028.521211385],
    [0.00000001472, 3.05265290863, 106.2741679563],
    [0.00000001477, 2.93278086779, 4326.3934009738],
    [0.00000001465, 5.46523080582, 142.4496501338],
    [0.00000001464, 1.23391618293, 1262.3860848887],
    [0.00000001841, 2.9939476646, 416.3032501375],
    [0.00000001411, 1.79509632698, 3281.2385647862],
    [0.00000001476, 1.45573438752, 422.6660376129],
    [0.00000001431, 4.914896045, 295.0512286542],
    [0.00000001398, 0.54545102375, 621.7380390493],
    [0.00000001662, 0.25325060497, 3473.1970192218],
    [0.00000001369, 5.51922759178, 4532.578949411],
    [0.00000001355, 4.83421727726, 4120.2078525366],
    [0.00000001801, 2.53164752953, 1773.9178027186],
    [0.00000001311, 1.40709372363, 643.8294395771],
    [0.0000000141, 6.10412992034, 4635.6717236296],
    [0.00000001276, 5.98782317115, 1268.7488723641],
    [0.00000001365, 5.80345575246, 4017.115078318],
    [0.00000001216, 0.96080145393, 1269.4996318895],
    [0.000000012, 2.13469405177, 1884.124123938],
    [0.00000001366, 4.08138313627, 210.1177017003],
    [0.00000001403, 2.40261167806, 2545.3620512544],
    [0.00000001225, 2.17197490702, 1056.2005364515],
    [0.00000001192, 2.28634758898, 2200.5159935946],
    [0.00000001207, 1.45624154163, 408.4389436113],
    [0.00000001493, 1.76924313125, 1567.7322542814],
    [0.00000001392, 5.843093395, 760.25553592],
    [0.00000001396, 2.70516000022, 732.6951197941],
    [0.0000000129, 4.26241974953, 4539.6924964118],
    [0.00000001099, 0.36841109096, 3789.5888888784],
    [0.00000001125, 0.93154349839, 2620.0006374698],
    [0.00000001265, 0.5232095791, 3995.7744373156],
    [0.0000000101, 1.50009178285, 3597.6304344428],
    [0.00000001319, 3.37587792512, 1289.9465010146],
    [0.00000001357, 2.26129138768, 2090.3096723752],
    [0.00000000987, 4.83275244188, 9492.1463150048],
    [0.00000001136, 2.23103542771, 2516.9078632512],
    [0.00000001052, 0.19466114155, 3796.7024358792],
    [0.00000000985, 1.14090420561, 739.0579072695],
    [0.00000000945, 0.07649319601, 1357.6145525811],
    [0.00000001097, 2.73293853374, 70.8494453042],
    [0.00000001117, 5.11238654535, 433.7117378768],
    [0.00000000926, 4.02728325821, 430.5303441391],
    [0.00000001005, 5.87853159718, 4209.0735327536],
    [0.00000000911, 0.24491957702, 938.1299087059],
    [0.00000000904, 5.95473333483, 1578.0271950199],
    [0.00000000897, 5.93186910827, 81.7521332162],
    [0.00000000934, 1.07041891035, 960.2213092337],
    [0.0000000123, 3.71958483209, 99.1606209555],
    [0.0000000088, 0.98002541962, 1578.7779545453],
    [0.00000000898, 4.49059905658, 114.1384744825],
    [0.00000000898, 1.78854654667, 4.665866446],
    [0.00000000855, 4.25834782818, 203.0041546995],
    [0.00000000878, 2.51450819685, 92.0470739547],
    [0.00000001023, 2.4246591237, 1049.0869894507],
    [0.0000000085, 1.14593658328, 724.8308132679],
    [0.00000000796, 4.71609360713, 4436.5997221932],
    [0.00000000799, 2.68618232079, 4642.7852706304],
    [0.00000000778, 0.37399865746, 4105.980758535],
    [0.00000000773, 1.09325803913, 415.5524906121],
    [0.00000000826, 1.87846587423, 1372.5924061081],
    [0.00000000992, 2.07958202889, 2833.2997329078],
    [0.00000000825, 5.5815351018, 4333.5069479746],
    [0.00000000787, 0.05773755459, 5230.807466803],
    [0.00000000744, 5.72160819359, 1585.1407420207],
    [0.00000000782, 5.30032785024, 9683.5945811164],
    [0.00000000783, 3.97111486101, 533.6231183577],
    [0.00000000811, 5.86014849887, 4952.0635932862],
    [0.00000000853, 3.7482386802, 526.5095713569],
    [0.00000000799, 1.36635021285, 32.2433289144],
    [0.00000000988, 1.99496874091, 2406.7015420318],
    [0.00000000709, 0.70068235445, 1585.8915015461],
    [0.00000000933, 2.23645313465, 2861.753920911],
    [0.00000000702, 1.21630985216, 3914.0223040994],
    [0.0000000074, 5.67476482418, 5216.5803728014],
    [0.000000008, 6.0668281536, 1371.8416465827],
    [0.00000000743, 5.31636199094, 4848.9708190676],
    [0.00000000703, 1.47978695194, 9161.0171630226],
    [0.00000000658, 0.38004478874, 1364.7280995819],
    [0.00000000653, 0.82132145075, 731.9443602687],
    [0.00000000764, 3.99959487967, 4856.0843660684],
    [0.00000000651, 0.8472624754, 1055.4497769261],
    [0.00000000661, 0.81270079117, 9146.790069021],
    [0.00000000696, 0.72051048365, 2936.3925071264],
    [0.00000000628, 4.38440393038, 5.4166259714],
    [0.00000000773, 0.27388090871, 4312.1663069722],
    [0.00000000758, 2.13959430338, 827.9235874865],
    [0.00000000624, 5.80687177081, 10742.9765113056],
    [0.00000000806, 1.88356632353, 3149.6916025644],
    [0.00000000638, 6.22681815988, 4113.0943055358],
    [0.00000000615, 0.75721053806, 1276.6131788903],
    [0.00000000567, 5.21733527614, 458.8415197904],
    [0.00000000716, 2.14932604381, 1365.4788591073],
    [0.00000000589, 0.83748110395, 1041.2226829245],
    [0.00000000552, 6.22052123961, 1254.5217783625],
    [0.00000000731, 2.60590284482, 195.1398481733],
    [0.0000000055, 0.28943478715, 4422.3726281916],
    [0.00000000536, 5.13875401497, 103821.92160120218],
    [0.00000000605, 1.77314167846, 842.1506814881],
    [0.00000000614, 4.5411275705, 1894.4190646765],
    [0.00000000592, 4.27549032848, 2803.8079146044],
    [0.00000000545, 4.5298899352, 611.4430983108],
    [0.00000000589, 3.79142981152, 2818.035008606],
    [0.0000000061, 3.48261460813, 842.9014410135],
    [0.00000000541, 3.94818453975, 519.3960243561],
    [0.0000000054, 1.60003319875, 1688.9842757647],
    [0.0000000053, 2.64702441151, 1512.8068240082],
    [0.00000000511, 0.73634450892, 1895.1698242019],
    [0.00000000498, 0.54921023141, 1048.3362299253],
    [0.00000000699, 1.73227023159, 2723.0934116884],
    [0.00000000556, 5.69207961029, 4525.4654024102],
    [0.00000000624, 2.71933840047, 209.3669421749],
    [0.00000000484, 5.53771982125, 1901.5326116773],
    [0.00000000559, 5.19780361157, 67.6680515665],
    [0.00000000476, 4.59214775759, 4752.9915918498],
    [0.00000000476, 0.94165617582, 4230.414173756],
    [0.00000000512, 4.6862609132, 5753.3848848968],
    [0.00000000508, 3.69945257088, 850.0149880143],
    [0.00000000476, 5.78692620535, 569.0478410098],
    [0.0000000053, 4.97546219281, 976.0023119128],
    [0.00000000492, 5.36673932509, 4649.8988176312],
    [0.00000000618, 2.09105086089, 3178.1457905676],
    [0.00000000528, 1.99126936063, 25565.3257234804],
    [0.00000000619, 1.66565469783, 3466.083472221],
    [0.00000000514, 2.47532845024, 25551.09862947879],
    [0.00000000509, 4.4604551567, 990.2294059144],
    [0.00000000512, 1.98004109269, 230.5645708254],
    [0.00000000438, 0.57339078464, 319.5732633943],
    [0.00000000538, 0.97027383178, 1215.1649024473],
    [0.00000000428, 2.44309032416, 4959.177140287],
    [0.00000000418, 3.59783313439, 746.9222137957],
    [0.00000000491, 4.00796445093, 647.0108333148],
    [0.00000000411, 5.04297430666, 35.4247226521],
    [0.00000000474, 0.12243544307, 245.5424243524],
    [0.00000000463, 5.62020086717, 5268.4554629428],
    [0.00000000398, 0.45088184298, 1902.2833712027],
    [0.0000000041, 3.65727724676, 835.7878940127],
    [0.00000000483, 1.8776546684, 1681.8707287639],
    [0.00000000441, 4.01112688674, 113.3877149571],
];

const A2: &[Term] = &[
    [0.00002100381, 2.75770207184, 7.1135470008],
    [0.00000210954, 4.19391095229, 419.4846438752],
    [0.00000244841, 5.39511569851, 206.1855484372],
    [0.00000167983, 4.51179472459, 103.0927742186],
    [0.00000155324, 2.61803685429, 14.2270940016],
    [0.0000011698, 3.97770632245, 735.8765135318],
    [0.00000111307, 3.00520857434, 110.2063212194],
    [0.00000107734, 5.34323507232, 639.897286314],
    [0.00000119358, 5.12756771606, 522.5774180938],
    [0.00000079837, 3.00992544577, 625.6701923124],
    [0.00000073916, 4.2536232425, 412.3710968744],
    [0.00000072788, 5.09081575706, 956.2891559706],
    [0.00000067823, 3.76037683224, 1052.2683831884],
    [0.00000072324, 4.87715645419, 838.9692877504],
    [0.00000056368, 3.97817453945, 728.762966531],
    [0.00000054728, 2.76873437692, 942.062061969],
    [0.00000067921, 4.151417231, 632.7837393132],
    [0.0000004961, 0.07235128266, 309.2783226558],
    [0.0000004525, 5.98790371535, 95.9792272178],
    [0.00000045118, 4.83911042875, 1272.6810256272],
    [0.00000040695, 3.71004220173, 1045.1548361876],
    [0.0000004615, 4.55210682721, 1155.361157407],
    [0.00000039575, 3.54557716128, 1368.660252845],
    [0.00000047799, 0.22015427614, 426.598190876],
    [0.00000049242, 3.89666703885, 949.1756089698],
    [0.00000046397, 5.52008948138, 199.0720014364],
    [0.00000033147, 2.53085887684, 1258.4539316256],
    [0.00000027927, 3.44742200336, 1361.5467058442],
    [0.00000029893, 4.26403428137, 1471.7530270636],
    [0.0000003387, 6.20170756432, 742.9900605326],
    [0.0000002673, 4.59042571954, 1589.0728952838],
    [0.00000031846, 3.63628831845, 1265.5674786264],
    [0.00000023161, 3.33296119094, 1685.0521225016],
    [0.00000029434, 5.22371544804, 515.463871093],
    [0.00000018728, 2.3098900728, 1574.8458012822],
    [0.00000018398, 3.18959874477, 1677.9385755008],
    [0.00000018021, 2.64180036091, 117.3198682202],
    [0.00000017205, 1.2517031403, 529.6909650946],
    [0.00000022094, 4.94532513499, 831.8557407496],
    [0.0000001921, 3.98278156109, 1788.1448967202],
    [0.00000021103, 5.93960920381, 1059.3819301892],
    [0.00000015455, 4.17321322012, 1162.4747044078],
    [0.00000019697, 3.38008494341, 1581.959348283],
    [0.00000015361, 4.34989001347, 1905.4647649404],
    [0.00000012886, 3.94556397754, 1478.8665740644],
    [0.00000013495, 3.12461933413, 2001.4439921582],
    [0.00000016492, 4.65396656717, 1148.2476104062],
    [0.00000011921, 0.19499455512, 302.164775655],
    [0.00000011724, 2.93732692234, 1994.3304451574],
    [0.00000011135, 1.49356349912, 220.4126424388],
    [0.00000012193, 3.70882729762, 2104.5367663768],
    [0.00000013845, 5.66244211547, 1375.7737998458],
    [0.00000010054, 2.11239416631, 1891.2376709388],
    [0.00000012084, 4.37337239032, 1464.6394800628],
    [0.00000011831, 3.12858413469, 1898.3512179396],
    [0.00000009227, 3.72281043974, 1795.258443721],
    [0.00000008679, 4.12814665085, 2221.856634597],
    [0.00000010024, 5.30834304698, 1692.1656695024],
    [0.00000007271, 2.69073912265, 2310.722314814],
    [0.00000007843, 2.91929509948, 2317.8358618148],
    [0.00000007046, 0.29337404492, 323.5054166574],
    [0.00000006944, 0.96772232202, 88.865680217],
    [0.000000079, 1.09944930621, 213.299095438],
    [0.00000007026, 2.21566176274, 3.1813937377],
    [0.00000008609, 4.09662408313, 1781.0313497194],
    [0.00000007636, 3.44173736121, 2420.9286360334],
    [0.00000006145, 3.50191473173, 2111.6503133776],
    [0.00000005497, 2.44921034328, 21.3406410024],
    [0.00000006959, 2.88220565823, 2214.7430875962],
    [0.00000006965, 5.01627314968, 2008.557539159],
    [0.0000000517, 1.94956442835, 2207.6295405954],
    [0.00000006877, 4.43870556635, 316.3918696566],
    [0.00000005084, 0.91294181851, 3.9321532631],
    [0.00000005995, 6.16114689922, 1485.9801210652],
    [0.00000005971, 3.82381733082, 2097.423219376],
    [0.0000000544, 5.92491251586, 1802.3719907218],
    [0.00000004408, 2.45045358638, 2627.1141844706],
    [0.00000004799, 3.91965551502, 2538.2485042536],
    [0.00000004721, 3.1809482648, 2737.32050569],
    [0.00000004548, 2.71670576086, 2634.2277314714],
    [0.00000003921, 3.28141011644, 2428.0421830342],
    [0.00000004746, 4.73614219947, 2324.9494088156],
    [0.00000004993, 0.07329341683, 1169.5882514086],
    [0.00000004292, 5.67912912055, 2118.7638603784],
    [0.00000003445, 4.13661673246, 721.6494195302],
    [0.00000004024, 2.64127343295, 2531.1349572528],
    [0.00000004043, 3.55485583541, 2413.8150890326],
    [0.00000003217, 4.4298798129, 405.2575498736],
    [0.00000003043, 3.865140929, 1038.0412891868],
    [0.00000002566, 1.84036393667, 2524.021410252],
    [0.00000003114, 5.43204953785, 2435.155730035],
    [0.0000000262, 2.21724988756, 2943.5060541272],
    [0.00000003162, 4.46486180066, 2641.3412784722],
    [0.00000002884, 2.92581135779, 3053.7123753466],
    [0.00000002419, 3.60372770389, 1354.4331588434],
    [0.00000002432, 3.06062176685, 2744.4340526908],
    [0.00000002631, 2.51622168045, 2950.619601128],
    [0.00000002615, 3.7310160657, 2854.6403739102],
    [0.000000024, 5.68450229101, 191.9584544356],
    [0.00000002678, 3.28970520214, 2730.2069586892],
    [0.0000000246, 5.12068226516, 846.0828347512],
    [0.00000002295, 2.4060851071, 2847.5268269094],
    [0.00000002142, 5.18690082835, 2751.5475996916],
    [0.00000001793, 1.58015976945, 1279.794572628],
    [0.00000002213, 2.76169787855, 1066.49547719],
    [0.00000001785, 3.35008887008, 1670.8250285],
    [0.00000001966, 5.36691070249, 508.3503240922],
    [0.00000001811, 2.06188735116, 10.2949407385],
    [0.00000001677, 1.33971607478, 227.5261894396],
    [0.00000002062, 4.19980595447, 2957.7331481288],
    [0.00000001551, 1.33387612646, 1596.1864422846],
    [0.00000001499, 2.88188562988, 853.196381752],
    [0.00000001978, 2.47020614447, 1382.8873468466],
    [0.00000001508, 1.8506868332, 963.4027029714],
    [0.00000001767, 5.08094012855, 824.7421937488],
    [0.0000000153, 1.9921910846, 3259.8979237838],
    [0.00000001919, 3.10166420976, 750.1036075334],
    [0.00000001743, 2.67601791847, 3370.1042450032],
    [0.00000001587, 1.98861685905, 1699.2792165032],
    [0.00000001572, 1.54814868459, 330.6189636582],
    [0.00000001477, 2.83976310571, 3060.8259223474],
    [0.0000000174, 3.02835899231, 3046.5988283458],
    [0.00000001323, 1.58466515945, 2015.6710861598],
    [0.00000001412, 4.94494263113, 3067.9394693482],
    [0.00000001514, 4.79513096197, 1141.1340634054],
    [0.00000001237, 3.3519395023, 934.9485149682],
    [0.00000001255, 1.81400886059, 2840.4132799086],
    [0.0000000152, 2.31754533631, 3267.0114707846],
    [0.00000001245, 3.10464986082, 1987.2168981566],
    [0.00000001166, 1.10237222593, 1912.5783119412],
    [0.00000001294, 2.17751451907, 3163.918696566],
    [0.0000000108, 1.2110749921, 2332.0629558164],
    [0.00000001412, 3.56613552338, 3171.0322435668],
    [0.00000001319, 3.93967560586, 3274.1250177854],
    [0.00000001241, 4.51761586295, 1457.525933062],
    [0.00000001012, 3.54927164631, 629.6023455755],
    [0.00000000974, 1.7058475808, 124.433415221],
    [0.00000000943, 4.74686053224, 635.9651330509],
    [0.00000000866, 0.34427495344, 295.0512286542],
    [0.00000000852, 0.8691311592, 2648.454825473],
    [0.00000000822, 2.90105705118, 5223.6939198022],
    [0.00000001043, 2.43126361021, 3686.4961146598],
    [0.00000000906, 3.26108756821, 1251.3403846248],
    [0.00000001111, 2.77105828735, 3362.9906980024],
    [0.00000000824, 4.84153700122, 536.8045120954],
    [0.0000000088, 1.77653363563, 3576.2897934404],
    [0.00000000901, 4.70752095336, 3384.3313390048],
    [0.00000000972, 4.24429704086, 1773.9178027186],
    [0.00000000825, 0.88593522789, 2228.9701815978],
    [0.00000000883, 2.61862163905, 3377.217792004],
    [0.00000000741, 4.32188709825, 9153.9036160218],
    [0.00000000829, 2.86903277864, 2303.6087678132],
    [0.00000000698, 3.28778757852, 945.9942152321],
    [0.00000000647, 0.55179770695, 2964.8466951296],
    [0.00000000723, 1.95587455488, 3480.3105662226],
    [0.00000000877, 2.12037306746, 3583.4033404412],
    [0.00000000761, 3.42863883709, 3487.4241132234],
    [0.00000000829, 3.68314017659, 3590.516887442],
    [0.00000000602, 1.40329047088, 81.7521332162],
    [0.00000000732, 3.97538753822, 2090.3096723752],
    [0.00000000618, 4.47663382433, 952.3570027075],
    [0.00000000716, 4.00870553871, 618.5566453116],
    [0.00000000696, 4.78454250714, 416.3032501375],
    [0.00000000515, 5.92235732721, 99.9113804809],
    [0.00000000523, 4.84728015368, 628.8515860501],
    [0.00000000502, 3.71510526052, 18.1592472647],
    [0.00000000561, 4.47546171944, 3700.7232086614],
    [0.00000000698, 2.51774739713, 3679.382567659],
    [0.00000000553, 0.69560851811, 2545.3620512544],
    [0.0000000064, 1.89377368798, 3156.8051495652],
    [0.00000000562, 3.48608802945, 1567.7322542814],
    [0.00000000475, 0.25111474576, 3281.2385647862],
    [0.00000000619, 2.19142183704, 4002.8879843164],
    [0.00000000465, 3.89546795354, 1884.124123938],
    [0.0000000053, 2.64530759713, 2620.0006374698],
    [0.00000000465, 3.4523686064, 636.7158925763],
    [0.00000000499, 1.57150998237, 3892.681663097],
    [0.00000000521, 2.39763793061, 3693.6096616606],
    [0.00000000533, 3.70995477959, 2406.7015420318],
    [0.0000000053, 4.49545224446, 732.6951197941],
    [0.00000000478, 4.04530962416, 2200.5159935946],
    [0.00000000412, 1.50924683861, 380.12776796],
    [0.00000000442, 3.02974202913, 1262.3860848887],
    [0.000000004, 1.30369257925, 106.2741679563],
    [0.00000000388, 6.06222741961, 203.0041546995],
    [0.00000000505, 1.92414728977, 3899.7952100978],
    [0.00000000383, 5.92476180091, 210.1177017003],
    [0.0000000051, 4.66519472705, 423.4167971383],
    [0.00000000397, 0.04288334247, 902.7051860538],
];

const A3: &[Term] = &[
    [0.00000289189, 1.03672574333, 7.1135470008],
    [0.00000042376, 0.90818529126, 14.2270940016],
    [0.00000022669, 0.86695733896, 206.1855484372],
    [0.00000014743, 3.64332702568, 639.897286314],
    [0.0000001356, 5.97631907314, 412.3710968744],
    [0.00000011051, 4.74829294111, 625.6701923124],
    [0.00000010811, 6.10725144267, 419.4846438752],
    [0.00000010365, 5.7104268283, 728.762966531],
    [0.00000009932, 3.40017985433, 956.2891559706],
    [0.00000009211, 1.31407594915, 110.2063212194],
    [0.00000010584, 0.95034876443, 199.0720014364],
    [0.00000011195, 0.62977758601, 522.5774180938],
    [0.00000008537, 0.0519709823, 103.0927742186],
    [0.00000007608, 4.52282607202, 942.062061969],
    [0.00000007499, 5.4501154922, 1045.1548361876],
    [0.00000006874, 1.81567315076, 309.2783226558],
    [0.00000006577, 1.41094825981, 95.9792272178],
    [0.00000006139, 3.15772867401, 1272.6810256272],
    [0.00000006879, 0.41111862555, 838.9692877504],
    [0.00000006374, 5.95914258776, 735.8765135318],
    [0.00000006729, 0.66263403886, 515.463871093],
    [0.00000005157, 5.19555542493, 1361.5467058442],
    [0.0000000463, 4.29920748825, 1258.4539316256],
    [0.00000005059, 0.39115930817, 831.8557407496],
    [0.00000004392, 4.72180867463, 426.598190876],
    [0.0000000363, 2.91805865058, 1589.0728952838],
    [0.00000003532, 0.96509656917, 117.3198682202],
    [0.00000004418, 0.08792101707, 1155.361157407],
    [0.00000003263, 1.9129608726, 302.164775655],
    [0.00000003406, 4.94580195475, 1677.9385755008],
    [0.00000003937, 5.79472099192, 1052.2683831884],
    [0.00000003779, 0.10310821442, 1148.2476104062],
    [0.0000000263, 4.09463507465, 1574.8458012822],
    [0.00000003042, 4.43947864419, 742.9900605326],
    [0.00000002275, 0.74199810325, 21.3406410024],
    [0.00000002893, 6.09718912083, 1471.7530270636],
    [0.00000002772, 6.11013481764, 1464.6394800628],
    [0.00000002137, 2.72267651923, 88.865680217],
    [0.00000002176, 4.70215706865, 1994.3304451574],
    [0.00000002082, 2.68636546998, 1905.4647649404],
    [0.00000002033, 6.08033306748, 220.4126424388],
    [0.00000002447, 5.6212984517, 1368.660252845],
    [0.00000001977, 5.83767465439, 1781.0313497194],
    [0.00000001823, 4.16288448507, 1059.3819301892],
    [0.0000000188, 5.8308226389, 1788.1448967202],
    [0.00000001423, 3.91592202295, 1891.2376709388],
    [0.00000001353, 4.46462476989, 2310.722314814],
    [0.00000001529, 5.43524938052, 1685.0521225016],
    [0.00000001373, 5.56932629635, 2097.423219376],
    [0.00000001167, 2.47075278265, 2221.856634597],
    [0.00000001184, 3.90047169169, 1375.7737998458],
    [0.00000001094, 5.84752515157, 721.6494195302],
    [0.00000001208, 5.5733003016, 2104.5367663768],
    [0.00000001021, 6.13587024206, 405.2575498736],
    [0.00000000966, 5.57959627872, 1038.0412891868],
    [0.00000000948, 5.24510496894, 2001.4439921582],
    [0.00000001029, 4.58817646912, 1485.9801210652],
    [0.00000000868, 1.10851792074, 191.9584544356],
    [0.00000000931, 5.30490732841, 2413.8150890326],
    [0.00000000939, 4.35223735789, 1802.3719907218],
    [0.00000000786, 2.80734329882, 1162.4747044078],
    [0.00000000741, 3.77412912962, 2207.6295405954],
    [0.00000000769, 5.73963224302, 529.6909650946],
    [0.00000000823, 4.23368446706, 2627.1141844706],
    [0.00000000857, 3.62967944869, 1692.1656695024],
    [0.00000000871, 4.57055422315, 323.5054166574],
    [0.00000000768, 5.32130553739, 1354.4331588434],
    [0.00000000714, 0.80123812634, 508.3503240922],
    [0.00000000766, 5.32409791354, 2420.9286360334],
    [0.00000000844, 4.79118716764, 1169.5882514086],
    [0.00000000743, 4.10970360716, 2118.7638603784],
    [0.00000000665, 2.64163619009, 1478.8665740644],
    [0.00000000642, 0.51467600768, 824.7421937488],
    [0.0000000064, 2.26726466279, 2538.2485042536],
    [0.00000000584, 5.04956087685, 2317.8358618148],
    [0.00000000617, 5.04462331683, 2730.2069586892],
    [0.00000000485, 6.16381035984, 1279.794572628],
    [0.00000000551, 0.23256904269, 1141.1340634054],
    [0.00000000566, 5.07110829381, 1670.8250285],
    [0.00000000596, 3.39351391116, 2008.557539159],
    [0.00000000516, 5.92040234175, 227.5261894396],
    [0.0000000054, 3.86807983242, 2435.155730035],
    [0.00000000588, 0.19274133971, 10.2949407385],
    [0.00000000504, 1.03952292203, 1066.49547719],
    [0.00000000419, 5.91804337401, 1596.1864422846],
    [0.00000000473, 5.32275044745, 213.299095438],
    [0.00000000491, 4.01131804634, 2943.5060541272],
    [0.0000000041, 0.15226419473, 963.4027029714],
    [0.00000000493, 2.47630689307, 1795.258443721],
    [0.00000000451, 6.23985712464, 1457.525933062],
    [0.00000000481, 5.08157551247, 2737.32050569],
    [0.00000000445, 0.75343353736, 1382.8873468466],
];

const A4: &[Term] = &[
    [0.00000030039, 5.57966344138, 7.1135470008],
    [0.00000008809, 5.46579084771, 14.2270940016],
    [0.00000001867, 1.43786862863, 412.3710968744],
    [0.00000001808, 2.68099289855, 199.0720014364],
    [0.00000001508, 1.93065779379, 639.897286314],
    [0.00000001633, 2.67755377698, 206.1855484372],
    [0.00000001434, 1.18437096356, 728.762966531],
    [0.00000001151, 0.23452659719, 625.6701923124],
    [0.00000001155, 2.40429091231, 515.463871093],
    [0.00000001011, 1.70390225943, 956.2891559706],
    [0.00000001042, 0.93437988543, 1045.1548361876],
    [0.000000008, 0.03000379055, 942.062061969],
    [0.00000000874, 2.13880029133, 831.8557407496],
    [0.00000000821, 2.47434524709, 522.5774180938],
    [0.0000000073, 3.58475634156, 309.2783226558],
    [0.00000000766, 3.15064537393, 95.9792272178],
    [0.00000000687, 5.82411530423, 110.2063212194],
    [0.00000000677, 3.64622752527, 302.164775655],
    [0.00000000623, 1.47792442313, 1272.6810256272],
    [0.00000000719, 0.69055302494, 1361.5467058442],
    [0.00000000654, 1.85610916337, 1148.2476104062],
    [0.00000000598, 5.19633429076, 21.3406410024],
    [0.00000000544, 4.48547647483, 88.865680217],
    [0.00000000491, 6.11072646256, 1258.4539316256],
    [0.00000000516, 2.2931145617, 838.9692877504],
    [0.00000000529, 5.55078271595, 117.3198682202],
    [0.0000000048, 1.583876473, 1464.6394800628],
    [0.00000000477, 0.45258389525, 1677.9385755008],
    [0.00000000466, 1.84510790283, 419.4846438752],
];

const A5: &[Term] = &[
    [0.00000002311, 3.68623332199, 7.1135470008],
    [0.00000001472, 3.67869308954, 14.2270940016],
];

const L0: &[Term] = &[
    [0.59954649739, 0.0, 0.0],
    [0.00573506125, 1.4439630642, 7.1135470008],
    [0.00062308554, 3.41857056095, 103.0927742186],
    [0.00032251188, 1.01358443926, 632.7837393132],
    [0.00023791184, 1.27622244841, 316.3918696566],
    [0.00013391386, 2.32518571601, 419.4846438752],
    [0.0001173059, 0.74641135653, 949.1756089698],
    [0.00006812004, 3.60956583595, 206.1855484372],
    [0.00005167226, 2.03396982022, 735.8765135318],
    [0.0000502848, 1.30119547663, 110.2063212194],
    [0.00004874926, 0.14125173816, 213.299095438],
    [0.00005301368, 1.30630311058, 14.2270940016],
    [0.00004646804, 4.69958744435, 3.9321532631],
    [0.00004844502, 0.48003774299, 1265.5674786264],
    [0.00002441576, 1.7497498297, 1052.2683831884],
    [0.00002028225, 1.06374295158, 3.1813937377],
    [0.000018247, 5.72883078185, 529.6909650946],
    [0.00001712597, 3.32169437274, 522.5774180938],
    [0.00002129932, 0.2186774321, 1581.959348283],
    [0.00001238477, 1.47069491582, 1368.660252845],
    [0.00001327642, 5.86632120612, 5753.3848848968],
    [0.00000945194, 4.09489728563, 95.9792272178],
    [0.00001277074, 1.00600288328, 9683.5945811164],
    [0.00000964842, 5.19532525625, 426.598190876],
    [0.00000787936, 3.03671091148, 838.9692877504],
    [0.00000970362, 6.24600641977, 1898.3512179396],
    [0.00000647693, 1.19631194143, 1685.0521225016],
    [0.0000062561, 3.99742805381, 639.897286314],
    [0.00000487615, 4.51977399861, 846.0828347512],
    [0.00000485899, 1.988776841, 1162.4747044078],
    [0.00000427922, 2.72411058898, 1155.361157407],
    [0.000004464, 4.91613442399, 742.9900605326],
    [0.00000390705, 1.72055843172, 1478.8665740644],
    [0.00000447356, 1.13357378569, 625.6701923124],
    [0.00000451691, 5.99615002792, 2214.7430875962],
    [0.00000343466, 0.92647959114, 2001.4439921582],
    [0.00000330424, 4.74049821741, 0.0481841098],
    [0.00000417259, 1.03549122058, 2.4476805548],
    [0.00000311427, 2.46010854121, 412.3710968744],
    [0.00000361031, 4.61309848294, 309.2783226558],
    [0.00000340025, 3.75417293032, 956.2891559706],
    [0.00000262133, 1.4459095743, 1795.258443721],
    [0.00000248153, 2.4242228695, 1471.7530270636],
    [0.00000261509, 1.87644110891, 0.9632078465],
    [0.00000295617, 4.37235061347, 909.8187330546],
    [0.00000222785, 4.73183950653, 1059.3819301892],
    [0.00000246029, 0.87826986409, 942.062061969],
    [0.00000220942, 4.22263431265, 323.5054166574],
    [0.00000183312, 0.66099793195, 2317.8358618148],
    [0.00000214564, 3.74920088756, 199.0720014364],
    [0.0000016784, 2.16680851537, 728.762966531],
    [0.00000213179, 5.75286549834, 2531.1349572528],
    [0.00000162979, 1.17304790237, 2111.6503133776],
    [0.00000184681, 3.50325567437, 1272.6810256272],
    [0.00000147182, 2.12910808939, 1788.1448967202],
    [0.00000131431, 4.45569551353, 1375.7737998458],
    [0.00000130465, 0.62552582455, 1258.4539316256],
    [0.00000116612, 3.38920959149, 0.5212648618],
    [0.00000125976, 0.82475018031, 380.12776796],
    [0.00000144088, 3.91175826114, 74.7815985673],
    [0.00000100864, 1.88411522703, 1045.1548361876],
    [0.00000097892, 1.16676461113, 117.3198682202],
    [0.00000098122, 0.39987008042, 2634.2277314714],
    [0.00000097196, 0.90258298227, 2428.0421830342],
    [0.00000087902, 1.8393227739, 2104.5367663768],
    [0.00000117441, 2.23306551604, 25558.2121764796],
    [0.00000101423, 5.51689776719, 2847.5268269094],
    [0.00000100056, 3.25412419575, 1589.0728952838],
    [0.00000109752, 4.03314255687, 2810.9214616052],
    [0.00000104966, 2.96068929763, 454.9093665273],
    [0.00000068446, 2.352090607, 2.9207613068],
    [0.000000756, 3.07345253277, 6283.0758499914],
    [0.00000076781, 4.42784299447, 39.3568759152],
    [0.00000063327, 4.97665472725, 0.7507595254],
    [0.00000061686, 1.60789932971, 1361.5467058442],
    [0.00000071554, 4.49644140128, 10213.285546211],
    [0.00000072068, 3.98808266301, 1692.1656695024],
    [0.00000070023, 3.45406424851, 515.463871093],
    [0.00000067307, 0.38409100971, 1574.8458012822],
    [0.00000079761, 4.71267614847, 983.1158589136],
    [0.0000006026, 4.12628977741, 4.192785694],
    [0.00000055984, 1.15410172125, 21.3406410024],
    [0.00000074137, 2.00751563716, 835.0371344873],
    [0.00000052868, 0.91348329695, 10.2949407385],
    [0.00000056434, 0.63478682201, 2744.4340526908],
    [0.00000052502, 0.14309694483, 2950.619601128],
    [0.00000052405, 1.5546330065, 2420.9286360334],
    [0.0000004994, 0.28091221516, 220.4126424388],
    [0.000000465, 4.66483678276, 5.6290742925],
    [0.00000054015, 3.01635180177, 1905.4647649404],
    [0.00000040146, 4.68801114087, 0.1600586944],
    [0.00000048506, 5.28908976259, 3163.918696566],
    [0.00000046116, 5.10883021748, 4.665866446],
    [0.00000054094, 5.7712164817, 1364.7280995819],
    [0.00000046871, 3.5460020569, 5.4166259714],
    [0.00000037476, 1.3369646839, 1677.9385755008],
    [0.00000039143, 1.71987702005, 11.0457002639],
    [0.00000040007, 3.16413183762, 831.8557407496],
    [0.00000044909, 3.57724651592, 2008.557539159],
    [0.00000031103, 1.27465940725, 2737.32050569],
    [0.00000032145, 0.36981755302, 3060.8259223474],
    [0.0000003368, 0.15960509676, 1891.2376709388],
    [0.00000028061, 6.17401280349, 3267.0114707846],
    [0.00000027716, 1.85227036207, 0.2124483211],
    [0.0000003184, 4.79494293343, 305.3461693927],
    [0.00000031662, 5.29151724916, 88.865680217],
    [0.00000026601, 4.72914209006, 302.164775655],
    [0.00000023402, 2.63237076454, 114.1384744825],
    [0.00000027084, 2.81204264565, 18.1592472647],
    [0.00000022492, 1.071328338, 1994.3304451574],
    [0.00000025549, 2.8676254152, 1148.2476104062],
    [0.0000003081, 0.42313170003, 1.4844727083],
    [0.00000029433, 2.7833201257, 2221.856634597],
    [0.00000028624, 3.18355680128, 2324.9494088156],
    [0.00000024016, 5.28381765413, 51646.11531805379],
    [0.00000023354, 1.22042464664, 453.424893819],
    [0.00000023274, 5.07046313229, 3480.3105662226],
    [0.00000019466, 0.52370215055, 14.977853527],
    [0.00000022653, 5.82063978638, 12036.4607348882],
    [0.00000021407, 0.65543953977, 9153.9036160218],
    [0.00000021067, 5.5031335366, 5223.6939198022],
    [0.0000001835, 0.99904596504, 3053.7123753466],
    [0.00000018042, 0.10777078605, 3377.217792004],
    [0.00000021527, 1.28574453157, 35.4247226521],
    [0.00000014969, 5.92640987353, 3583.4033404412],
    [0.0000001832, 2.81426933636, 2641.3412784722],
    [0.00000016857, 2.57753492513, 1464.6394800628],
    [0.00000016281, 6.24472444062, 2207.6295405954],
    [0.00000014705, 5.28547272751, 142.4496501338],
    [0.00000017977, 4.30187434705, 6.1503391543],
    [0.00000018427, 3.40991655874, 1289.9465010146],
    [0.00000013315, 0.81095413495, 2310.722314814],
    [0.00000013705, 2.655747131, 536.8045120954],
    [0.00000014164, 2.71597731671, 0.2606324309],
    [0.00000014637, 0.87710303632, 99.1606209555],
    [0.00000017827, 3.13677598652, 491.5579294568],
    [0.00000012557, 1.39090477832, 7.065362891],
    [0.00000011623, 4.60475183242, 7.1617311106],
    [0.00000015973, 2.56996185505, 2538.2485042536],
    [0.00000011006, 2.44323388509, 430.5303441391],
    [0.00000010755, 0.72751572404, 3370.1042450032],
    [0.00000010622, 3.1151875153, 1.2720243872],
    [0.00000011192, 4.86216892192, 3796.7024358792],
    [0.00000010582, 4.37301232887, 6151.533888305],
    [0.00000011644, 2.46746141606, 2957.7331481288],
    [0.00000011144, 2.29132762004, 1781.0313497194],
    [0.00000013145, 5.9286740821, 760.25553592],
    [0.00000010971, 3.58204045811, 217.2312487011],
    [0.00000010005, 6.13198161899, 3693.6096616606],
    [0.00000011426, 4.67723811899, 1485.9801210652],
    [0.00000008769, 1.88446788567, 19896.8801273274],
    [0.00000009537, 4.08944567414, 38.1330356378],
    [0.00000010326, 4.43309305023, 1802.3719907218],
    [0.00000009812, 3.6633065593, 107.0249274817],
    [0.00000008815, 2.77427631998, 6.592282139],
    [0.00000009994, 4.80592359008, 1439.5096981492],
    [0.0000001061, 6.17309618963, 149.5631971346],
    [0.00000009777, 1.22341787276, 32.2433289144],
    [0.00000007966, 5.68371920118, 3899.7952100978],
    [0.00000010393, 4.0346485318, 355.7487455718],
    [0.00000010956, 0.91074791986, 1819.6374661092],
    [0.00000007772, 0.55619203432, 2627.1141844706],
    [0.00000010431, 2.07972700826, 92.0470739547],
    [0.00000007776, 6.07600658333, 70.8494453042],
    [0.00000007708, 1.69800757302, 8.0767548473],
    [0.00000007558, 6.09105425968, 2524.021410252],
    [0.00000009712, 0.00450964765, 1474.6737883704],
    [0.00000008504, 1.76979449033, 853.196381752],
    [0.00000007782, 2.12366898119, 33.9402499438],
    [0.000000087, 2.37384249325, 2854.6403739102],
    [0.00000008011, 4.17788552839, 2118.7638603784],
    [0.0000000881, 4.85304085936, 1169.5882514086],
    [0.00000007307, 2.00918863798, 2097.423219376],
    [0.00000007314, 2.13900639156, 3274.1250177854],
    [0.00000006261, 0.45975402619, 3686.4961146598],
    [0.00000006236, 4.54560347799, 2.7083129857],
    [0.00000007341, 1.24155312783, 24.3790223882],
    [0.00000005855, 5.4228099929, 28.3111756513],
    [0.0000000657, 1.25586215486, 3340.6124266998],
    [0.00000006469, 5.71673528681, 26087.9031415742],
    [0.00000005504, 0.06484394459, 202.2533951741],
    [0.00000007117, 1.43435094392, 6.2197751235],
    [0.00000006423, 4.14814508499, 628.8515860501],
    [0.00000005387, 4.90101493915, 69.1525242748],
    [0.00000005506, 2.05138610172, 77734.01845962799],
    [0.00000005492, 5.87624287481, 4010.0015313172],
    [0.00000006622, 2.33197482862, 230.5645708254],
    [0.00000005392, 4.66556289017, 4113.0943055358],
    [0.00000005716, 3.92206182904, 2435.155730035],
    [0.00000005066, 4.84118464116, 31.019488637],
    [0.0000000518, 5.08695760599, 67.6680515665],
    [0.00000004856, 0.07258618214, 78.7137518304],
    [0.00000004634, 6.14063904914, 106.2741679563],
    [0.00000004877, 5.63863653169, 1.6969210294],
    [0.00000004474, 0.30746644395, 2943.5060541272],
    [0.00000004505, 2.61331162581, 405.2575498736],
    [0.000000043, 0.5478382371, 1.4362885985],
    [0.00000005137, 3.76924178225, 984.6003316219],
    [0.00000005405, 0.9712588743, 636.7158925763],
    [0.00000004229, 5.4461859201, 4216.1870797544],
    [0.00000004735, 1.73100465987, 2413.8150890326],
    [0.0000000415, 2.11406697531, 746.9222137957],
    [0.0000000415, 4.00520681521, 99.9113804809],
    [0.00000004533, 1.82497403945, 3590.516887442],
    [0.00000004776, 2.19511792844, 3171.0322435668],
    [0.00000004198, 1.7630002181, 750.1036075334],
    [0.00000003656, 2.51319231253, 423.4167971383],
    [0.00000004527, 5.9766355693, 621.7380390493],
    [0.00000004838, 4.81362547685, 1744.8558675419],
    [0.00000003621, 0.19569739974, 4002.8879843164],
    [0.00000003416, 6.00302355875, 1.2238402774],
    [0.00000003371, 6.01775298436, 2840.4132799086],
    [0.0000000337, 2.30926597505, 721.6494195302],
    [0.00000003871, 3.6644705504, 2751.5475996916],
    [0.00000004438, 5.45574907944, 908.3342603463],
    [0.00000004026, 5.42257430482, 643.8294395771],
    [0.00000004408, 0.14696269308, 911.3032057629],
    [0.00000003804, 1.46364153569, 1066.49547719],
    [0.00000004466, 3.91776334078, 191.9584544356],
    [0.00000004148, 4.74946631331, 0.8937718773],
    [0.00000003744, 5.74417326777, 5760.4984318976],
    [0.00000003734, 2.84768787902, 5746.271337896],
    [0.00000003211, 5.86588453037, 4.1446015842],
    [0.00000003998, 1.04227239973, 1215.1649024473],
    [0.00000002951, 0.41444935546, 7.8643065262],
    [0.00000003606, 0.88364422519, 9690.7081281172],
    [0.00000003588, 4.27033783307, 9676.4810341156],
    [0.00000003523, 3.88905810752, 945.2434557067],
    [0.00000002867, 1.00894598814, 408.4389436113],
    [0.00000002987, 5.62393276399, 4326.3934009738],
    [0.00000003552, 3.78878898482, 672.1406152284],
    [0.00000002927, 5.44993817902, 415.5524906121],
    [0.00000003029, 1.45670409814, 2730.2069586892],
    [0.00000003697, 5.06896858094, 73.297125859],
    [0.00000003032, 1.20874965798, 1382.8873468466],
    [0.00000002541, 0.06576644148, 3259.8979237838],
    [0.00000002772, 1.52226049595, 3906.9087570986],
    [0.00000003393, 1.07585324482, 46.470422916],
    [0.00000002604, 4.48192631634, 4429.4861751924],
    [0.00000002472, 2.02890304242, 1038.0412891868],
    [0.00000002399, 5.03199354501, 458.8415197904],
    [0.00000002379, 1.52226039171, 629.6023455755],
    [0.00000002653, 2.0319039886, 3487.4241132234],
    [0.00000002745, 3.33547703599, 533.6231183577],
    [0.00000002935, 0.69409205467, 953.1077622329],
    [0.00000002587, 0.03759881914, 1.6445314027],
    [0.00000002239, 5.21424099908, 4532.578949411],
    [0.00000002238, 3.61035828296, 635.9651330509],
    [0.00000002726, 6.21279383959, 1894.4190646765],
    [0.00000002522, 3.41248899542, 3067.9394693482],
    [0.00000002203, 3.94778076794, 31.492569389],
    [0.00000002169, 3.82463790809, 280.9671470045],
    [0.00000002111, 5.61905648966, 16.4623262353],
    [0.00000002802, 3.86221239984, 210.1177017003],
    [0.00000002515, 0.58416488949, 11506.7697697936],
    [0.00000002081, 6.21838275531, 4319.279853973],
    [0.00000002717, 2.51339293923, 494.2662424425],
    [0.00000002232, 5.05991912878, 960.2213092337],
    [0.00000001897, 2.17157846408, 739.8086667949],
    [0.00000001882, 1.77726650131, 1063.3140834523],
    [0.00000002189, 5.08353985666, 1512.8068240082],
    [0.00000002025, 4.82814273168, 17.2654753874],
    [0.00000001782, 1.80970027265, 944.9828232758],
    [0.00000002367, 5.66262037582, 938.1299087059],
    [0.00000002068, 1.88122863537, 25028.521211385],
    [0.0000000203, 2.29925399863, 195.1398481733],
    [0.00000001749, 1.75772419431, 1354.4331588434],
    [0.00000001709, 2.64477531114, 433.7117378768],
    [0.00000001706, 5.40277333713, 20.4468691251],
    [0.00000002317, 2.32821567642, 2274.5468326365],
    [0.00000001911, 1.18610090556, 3046.5988283458],
    [0.00000001757, 6.20082620879, 209.3669421749],
    [0.0000000165, 0.28035752757, 227.5261894396],
    [0.00000002102, 0.7760263713, 1699.2792165032],
    [0.00000001852, 0.25137605504, 1279.794572628],
    [0.0000000192, 3.59665347293, 1261.6353253633],
    [0.00000001745, 1.34021943171, 25.1297819136],
    [0.00000001601, 3.92730016055, 17.5261078183],
    [0.00000001764, 0.52581837115, 963.4027029714],
    [0.00000001611, 5.37524098217, 4642.7852706304],
    [0.00000002029, 3.56579748672, 685.4739373527],
    [0.00000001891, 0.35286275497, 124.433415221],
    [0.00000001674, 1.2286159938, 4223.3006267552],
    [0.00000002078, 4.56395103734, 312.4597163935],
    [0.00000001913, 1.90863253995, 378.6432952517],
    [0.00000001651, 0.63598293039, 17.4084877393],
    [0.00000001498, 1.41485503958, 224.3447957019],
    [0.00000001852, 2.36130812845, 37.8724032069],
    [0.00000001478, 1.73100264989, 59.8037450403],
    [0.000000015, 6.0880672768, 3156.8051495652],
    [0.00000002036, 2.77687595287, 177.8743727859],
    [0.00000001885, 3.35666702108, 569.0478410098],
    [0.0000000145, 6.10656146453, 518.6452648307],
    [0.00000001558, 3.17068661113, 252.6559713532],
    [0.00000001566, 0.01095228893, 245.5424243524],
    [0.00000001425, 6.11522685795, 3576.2897934404],
    [0.00000001598, 3.16525318231, 3384.3313390048],
    [0.00000001417, 0.68801149968, 724.8308132679],
    [0.00000001498, 1.87992987663, 3803.81598288],
    [0.00000001731, 4.50447437406, 902.7051860538],
    [0.000000014, 5.81708425358, 81.7521332162],
    [0.00000001406, 0.25811130227, 50.4025761791],
    [0.00000001486, 2.24866746675, 10.0343083076],
    [0.00000001716, 4.91945224695, 422.6660376129],
    [0.00000001573, 5.02201605211, 731.9443602687],
    [0.00000001843, 3.60265147085, 508.3503240922],
    [0.00000001655, 1.11321509428, 916.9322800554],
    [0.00000001329, 5.10213705852, 103821.92160120218],
    [0.00000001317, 1.24824683929, 945.9942152321],
    [0.00000001635, 3.54277469824, 988.532484885],
    [0.00000001669, 3.09206306863, 833.552661779],
    [0.00000001473, 0.00836347615, 1596.1864422846],
    [0.00000001268, 5.24652448906, 76.2660712756],
    [0.00000001588, 0.41661665001, 1269.4996318895],
    [0.00000001426, 2.82599723082, 416.3032501375],
    [0.00000001262, 4.31256289415, 4745.878044849],
    [0.00000001264, 3.03141172625, 12566.1516999828],
    [0.00000001189, 3.33602453683, 952.3570027075],
    [0.00000001183, 4.98789367034, 4848.9708190676],
    [0.0000000119, 1.49421066417, 1670.8250285],
    [0.0000000156, 0.33907389059, 2015.6710861598],
    [0.00000001263, 3.46181945532, 40.8413486235],
    [0.00000001369, 3.0810110324, 850.0149880143],
    [0.00000001188, 5.96136448551, 4635.6717236296],
    [0.00000001437, 1.25309111585, 604.4725636619],
    [0.00000001259, 4.7266380282, 1276.6131788903],
    [0.00000001127, 4.71036289275, 9492.1463150048],
    [0.0000000152, 3.65709156386, 282.4516197128],
    [0.00000001137, 2.48561382158, 2.0057375701],
    [0.00000001117, 1.85242995841, 1056.2005364515],
    [0.00000001276, 6.14455587281, 327.4375699205],
    [0.00000001118, 3.80747957482, 7.0016724162],
    [0.00000001468, 3.42123899487, 5621.8429232104],
    [0.00000001446, 5.54999644908, 43.2890291783],
    [0.0000000143, 0.0309306128, 138.5174968707],
    [0.00000001456, 6.22269896305, 155.7829722581],
    [0.00000001191, 0.91929843794, 3362.9906980024],
    [0.00000001077, 2.57045075542, 25.2727942655],
    [0.00000001037, 4.76515482371, 775.233389447],
    [0.00000001029, 2.98424802194, 387.2413149608],
    [0.00000001176, 6.18972728406, 2332.0629558164],
    [0.00000001, 4.40907228522, 2281.2304965106],
    [0.00000001018, 3.11325635942, 381.6122406683],
    [0.00000001317, 2.48589227786, 52175.8062831484],
    [0.00000001258, 3.305069158, 824.7421937488],
    [0.00000001287, 1.54102209157, 1366.2125722902],
    [0.00000001335, 1.58034032425, 1966.2317178272],
    [0.0000000105, 2.20935815967, 7.2254215854],
    [0.00000001262, 2.44183041871, 1670.0742689746],
    [0.00000001049, 5.81616598978, 26.826702943],
    [0.00000001284, 6.22031479606, 2199.7652340692],
    [0.00000001013, 1.04759882119, 934.9485149682],
    [0.00000001262, 5.35208734388, 1254.5217783625],
    [0.00000000999, 0.94241704443, 4539.6924964118],
    [0.00000000993, 4.84836363856, 1048.3362299253],
    [0.00000001165, 3.50653563773, 8.5980197091],
    [0.00000000903, 1.4396176858, 1379.7059531089],
    [0.0000000124, 2.27960685992, 6.9010986797],
    [0.00000000991, 2.92366135826, 3700.7232086614],
    [0.00000001193, 0.58203697595, 1363.2436268736],
    [0.00000001208, 2.24947619051, 810.6581120991],
    [0.0000000095, 6.14336687256, 1357.6145525811],
    [0.00000000893, 4.27448748055, 0.6331394464],
    [0.00000001162, 5.51229668479, 2.9689454166],
    [0.00000000902, 3.98166076918, 330.6189636582],
    [0.0000000104, 6.0621862303, 1912.5783119412],
    [0.00000001054, 3.32717814088, 1578.0271950199],
    [0.00000000897, 4.87758834736, 295.0512286542],
    [0.00000000962, 4.11044389599, 203.0041546995],
    [0.00000000848, 3.8667882169, 319.5732633943],
    [0.0000000085, 1.18650371636, 26617.5941066688],
    [0.00000000862, 1.73313023804, 4120.2078525366],
    [0.00000001052, 5.93713700567, 173.9422195228],
    [0.00000000862, 5.13060221428, 4959.177140287],
    [0.00000001132, 1.38778481624, 72.0732855816],
    [0.00000001007, 1.33494610369, 2349.3284312038],
    [0.00000000818, 0.37183272026, 1041.2226829245],
    [0.00000000886, 5.78682473523, 2648.454825473],
    [0.00000000925, 3.22175848455, 885.4397106664],
    [0.00000000788, 5.89063752442, 3892.681663097],
    [0.00000000782, 3.03559242565, 5.8415226136],
    [0.00000000781, 1.23882102016, 1987.2168981566],
    [0.00000000841, 2.66462960775, 1166.4068576709],
    [0.00000000747, 3.5122983468, 597.3590166611],
    [0.00000000731, 0.97908184366, 1262.3860848887],
    [0.00000000924, 3.01197447372, 1141.1340634054],
    [0.00000000736, 1.87578880182, 153.4953503977],
    [0.00000000919, 0.82826188405, 836.5216071956],
    [0.00000000816, 4.40678784803, 292.0128472684],
    [0.00000000768, 2.52947051093, 732.6951197941],
    [0.00000000827, 3.29928857787, 1304.9243545416],
    [0.00000000675, 1.54745743437, 1372.5924061081],
    [0.00000000851, 0.14451146893, 1585.8915015461],
    [0.0000000085, 5.46113734143, 41.0537969446],
    [0.00000000752, 3.69899511262, 306.830642101],
    [0.00000000801, 4.62262924261, 739.0579072695],
    [0.00000000707, 4.39991269141, 1593.0050485469],
    [0.00000000733, 0.65610691067, 3679.382567659],
    [0.00000000745, 1.68424124686, 696.5196376166],
    [0.00000000639, 4.22718483956, 25.8634950965],
    [0.00000000637, 3.06095619075, 1268.7488723641],
    [0.00000000674, 5.70773669165, 4952.0635932862],
    [0.00000000844, 2.65682603692, 981.6313862053],
    [0.00000000863, 4.62418059562, 593.426863398],
    [0.00000000623, 4.76771595647, 5165.3626887242],
    [0.00000000657, 5.41663384293, 2964.8466951296],
    [0.00000000715, 4.41501718729, 100.6450936638],
    [0.00000000646, 2.88581188015, 13.4933808187],
    [0.00000000615, 4.158205824, 5062.2699145056],
    [0.00000000858, 3.54354146911, 526.5095713569],
    [0.00000000611, 3.6065328306, 490.3340891794],
    [0.00000000592, 3.59987073623, 244.318584075],
    [0.00000000614, 0.19615386476, 10742.9765113056],
    [0.0000000058, 1.0203967098, 1251.3403846248],
    [0.00000000769, 0.04217305252, 3473.1970192218],
    [0.00000000666, 2.06624389948, 27.0873353739],
    [0.00000000643, 4.19073502968, 166.828672522],
    [0.00000000698, 5.84189178413, 2228.9701815978],
    [0.00000000741, 1.94064098766, 827.9235874865],
    [0.00000000724, 5.80431625828, 303.8616966844],
    [0.00000000604, 2.6883310975, 4017.115078318],
    [0.00000000773, 2.16869266894, 6386.16862421],
    [0.00000000731, 5.9328512294, 42.5382696529],
    [0.00000000547, 4.49800219127, 1091.6252591036],
    [0.00000000589, 0.66222078295, 4856.0843660684],
    [0.00000000543, 1.8494824137, 313.2104759189],
    [0.00000000707, 4.95923661404, 1140.38330388],
    [0.00000000682, 2.72444429057, 1457.525933062],
    [0.00000000648, 0.95788479611, 320.3240229197],
    [0.00000000564, 1.2965154043, 6275.9623029906],
    [0.00000000543, 0.38114844982, 63.7358983034],
    [0.00000000591, 1.97678118216, 511.5317178299],
    [0.00000000647, 4.70148954181, 112.6540017742],
    [0.0000000072, 3.59154514696, 10316.3783204296],
    [0.00000000546, 2.72077430829, 10206.1719992102],
    [0.00000000709, 2.30172501638, 457.617679513],
    [0.00000000507, 2.37652489035, 179.3588454942],
    [0.00000000508, 3.4836467464, 103.1409583284],
    [0.00000000504, 1.58458540264, 4436.5997221932],
    [0.00000000507, 6.27084682784, 1021.2488945514],
    [0.00000000529, 2.3053696524, 1482.7987273275],
    [0.00000000658, 5.04439350923, 456.3938392356],
    [0.00000000605, 1.58135069661, 6681.2248533996],
    [0.00000000545, 0.61786049171, 104.0559820651],
    [0.00000000535, 3.0188763262, 1371.8416465827],
    [0.00000000495, 0.99208369266, 2303.6087678132],
    [0.00000000506, 0.30285476582, 103.0445901088],
    [0.00000000484, 0.79038421065, 28.4541880032],
    [0.00000000508, 0.26277557543, 3789.5888888784],
    [0.00000000596, 5.05914797798, 842.1506814881],
    [0.00000000675, 5.047499305, 1570.9136480191],
    [0.00000000484, 5.37609202202, 20426.571092422],
    [0.00000000548, 3.33234588607, 19367.1891622328],
    [0.00000000621, 6.1710725462, 105.5404547734],
    [0.00000000479, 0.86786401053, 35.212274331],
    [0.00000000475, 5.07350677843, 3281.2385647862],
    [0.00000000594, 5.4962656117, 56.6223513026],
    [0.00000000565, 1.90953086007, 107.2855599126],
    [0.00000000604, 1.98717173439, 1127.0499817557],
    [0.00000000458, 4.89009308301, 5275.5690099436],
    [0.00000000443, 1.10742556845, 1696.0978227655],
    [0.00000000435, 5.4685316914, 135.336103133],
    [0.00000000482, 3.04341361317, 1201.831580323],
    [0.00000000433, 0.27250606972, 93.531546663],
    [0.00000000475, 0.95827496213, 113.3877149571],
    [0.00000000515, 3.68921117003, 415.2918581812],
    [0.00000000432, 5.67736359858, 4209.0735327536],
    [0.0000000055, 4.49294534967, 1288.4620283063],
    [0.00000000468, 2.23823795156, 1049.0869894507],
    [0.00000000448, 5.96847543912, 561.934294009],
    [0.00000000414, 1.54298298749, 115.6229471908],
    [0.00000000432, 4.94228492354, 51116.4243529592],
    [0.00000000508, 1.80384831157, 1012.9115072732],
    [0.00000000408, 1.25462754841, 1688.9842757647],
    [0.00000000429, 5.77860308656, 18319.5365848796],
    [0.00000000403, 0.7171751717, 1578.7779545453],
    [0.00000000468, 0.37355743443, 2004.364753465],
    [0.00000000492, 0.28706713362, 10977.078804699],
    [0.00000000455, 3.27021443075, 102.1295663721],
    [0.00000000431, 2.96625114756, 483.2205421786],
    [0.00000000496, 2.44239124366, 1773.9178027186],
    [0.00000000446, 0.39595758182, 3995.7744373156],
    [0.00000000404, 0.29566054155, 8624.2126509272],
    [0.00000000518, 4.78514169192, 761.7400086283],
    [0.00000000474, 3.30648701955, 121.2520214833],
    [0.00000000465, 4.84560315053, 976.0023119128],
    [0.00000000385, 3.22820022982, 913.7508863177],
    [0.00000000375, 0.31208323095, 4105.980758535],
    [0.00000000496, 3.75285032338, 2729.4561991638],
    [0.000000005, 2.54767895537, 141.2258098564],
    [0.00000000394, 4.0797570712, 1909.3969182035],
    [0.00000000397, 0.58664368074, 618.5566453116],
    [0.00000000435, 3.0596194332, 1621.3162241982],
    [0.00000000441, 4.32811543798, 1055.4497769261],
    [0.00000000442, 4.74721076201, 277.0349937414],
    [0.00000000366, 1.70242231749, 647.0108333148],
    [0.0000000047, 1.53109315047, 630.3360587584],
    [0.00000000446, 1.4510101045, 990.2294059144],
    [0.00000000443, 2.84393370717, 9786.687355335],
    [0.00000000357, 5.4930939734, 437.6438911399],
    [0.00000000381, 5.4575663045, 5268.4554629428],
    [0.00000000451, 6.16131296615, 1902.2833712027],
    [0.00000000394, 4.22037211065, 1681.1199692385],
    [0.00000000478, 3.82095961171, 81.0013736908],
    [0.00000000452, 5.64662099023, 2545.3620512544],
    [0.0000000034, 2.79031441638, 1585.1407420207],
    [0.0000000042, 1.42286810356, 5856.4776591154],
    [0.00000000364, 2.45935456883, 4333.5069479746],
    [0.00000000374, 0.94405124904, 373.0142209592],
    [0.00000000369, 5.21067366486, 1969.2006632438],
    [0.00000000463, 3.25827863409, 842.9014410135],
    [0.0000000036, 4.79607558018, 384.0599212231],
    [0.00000000366, 2.58483269446, 495.7507151508],
    [0.00000000408, 0.88331644015, 5650.2921106782],
    [0.0000000033, 1.86970135631, 129909.82474277639],
    [0.00000000335, 4.75199691028, 3597.6304344428],
    [0.00000000328, 4.553988444, 5481.7545583808],
    [0.00000000335, 1.95566506706, 1799.1905969841],
    [0.00000000335, 2.23812269514, 771.3012361839],
    [0.00000000425, 3.62466294436, 635.231419868],
    [0.0000000033, 6.05223269559, 215.7467759928],
    [0.00000000344, 0.38779978916, 5172.476235725],
    [0.00000000424, 3.39827649873, 598.8434893694],
    [0.00000000325, 4.44511342152, 505.3119427064],
    [0.00000000318, 1.03874393413, 632.831923423],
    [0.00000000352, 2.68434291816, 806.725958836],
    [0.00000000318, 4.1243802708, 632.7355552034],
    [0.0000000031, 4.2345648918, 1408.0171287602],
    [0.00000000394, 0.72732460325, 758.7710632117],
    [0.0000000034, 2.77813018312, 3.523118349],
    [0.00000000376, 2.31284180621, 9580.5018068978],
    [0.00000000303, 4.01859198789, 5378.6617841622],
    [0.00000000301, 6.12530704106, 366.7944458357],
    [0.000000003, 1.42916412503, 4752.9915918498],
    [0.00000000305, 0.75490576644, 2620.0006374698],
    [0.00000000345, 2.49841682006, 2200.5159935946],
    [0.00000000299, 4.63131067198, 385.5443939314],
    [0.00000000395, 3.84413736238, 2124.9836355019],
    [0.00000000298, 0.31798298895, 6172.869528772],
    [0.00000000342, 0.71175306178, 631.8205314667],
    [0.00000000336, 4.44921951879, 633.7469471597],
    [0.00000000289, 3.29623250361, 1436.5407527326],
    [0.00000000312, 4.59043536036, 188.9200730498],
    [0.00000000294, 6.04321279289, 1674.0064222377],
    [0.00000000323, 3.82232747568, 519.3960243561],
    [0.00000000318, 5.81533877644, 525.7588118315],
    [0.0000000038, 1.67955768855, 36.6485629295],
    [0.0000000032, 4.97016728276, 4694.0029547076],
    [0.00000000282, 0.39153854257, 207.6700211455],
    [0.00000000286, 1.73979328512, 10103.0792249916],
    [0.00000000354, 2.1646223113, 2090.3096723752],
    [0.00000000282, 6.0405660824, 395.105621487],
    [0.00000000283, 3.90409016847, 127.4717966068],
    [0.00000000346, 2.34000714196, 2516.9078632512],
    [0.00000000365, 2.94271592741, 1821.1219388175],
    [0.00000000288, 5.88118709806, 172.2452984934],
    [0.00000000274, 0.23373628442, 4422.3726281916],
    [0.00000000338, 1.23281405587, 232.0490435337],
    [0.00000000271, 2.37432808621, 97.6761482472],
    [0.00000000372, 0.82884650086, 362.8622925726],
    [0.00000000362, 1.06149753613, 181.806526049],
    [0.00000000271, 2.45766881781, 1884.124123938],
    [0.000000003, 4.57453319679, 429.0458714308],
    [0.00000000325, 2.83620342258, 1159.2933106701],
    [0.00000000291, 1.72663010961, 391.1734682239],
    [0.00000000335, 1.22322835289, 148.0787244263],
    [0.00000000263, 3.65120704478, 298.2326223919],
    [0.0000000036, 4.74931808716, 1887.3055176757],
    [0.00000000292, 1.95484750196, 1365.4788591073],
    [0.00000000313, 2.81080708279, 2210.8109343331],
    [0.00000000321, 4.87120263704, 134.5853436076],
    [0.00000000257, 1.79901106914, 465.9550667912],
    [0.00000000302, 5.53739235372, 78263.70942472259],
    [0.00000000268, 2.74403355281, 799.6124118352],
    [0.00000000322, 3.30167101045, 558.0021407459],
    [0.00000000345, 1.87826331557, 17260.1546546904],
    [0.00000000303, 5.50236826918, 25551.09862947879],
    [0.00000000302, 2.10553098356, 25565.3257234804],
    [0.00000000244, 0.96888745249, 2005.3761454213],
    [0.00000000259, 2.86994664633, 1518.2234499796],
    [0.0000000034, 1.34686164055, 2654.6746005965],
    [0.00000000242, 4.65434064752, 5591.9608796002],
    [0.00000000306, 3.04392104677, 447.7958195265],
    [0.00000000314, 1.72996060102, 1443.4418514123],
    [0.00000000293, 2.74389609654, 2804.2377977311],
    [0.00000000318, 1.99391533588, 1818.1529934009],
    [0.00000000269, 0.14073790484, 4312.1663069722],
    [0.00000000283, 1.01917795478, 2803.8079146044],
    [0.00000000231, 4.89539825223, 421.93232443],
    [0.00000000282, 3.90552629247, 2818.035008606],
    [0.00000000283, 5.99922859781, 462.0229135281],
    [0.0000000023, 4.44659855633, 3914.0223040994],
    [0.00000000226, 3.29161107065, 460.5384408198],
    [0.00000000301, 2.12564912704, 2833.2997329078],
    [0.00000000292, 1.20277401593, 610.6923387854],
    [0.00000000235, 0.16574304942, 137.0330241624],
    [0.00000000233, 5.47776320263, 4525.4654024102],
    [0.00000000253, 0.17198676377, 540.7366653585],
    [0.00000000292, 1.30950462802, 1329.3033769298],
    [0.0000000022, 0.46326228908, 1895.1698242019],
    [0.00000000295, 3.72801675977, 84.9335269539],
    [0.00000000269, 6.04141804564, 170.7608257851],
    [0.00000000218, 2.90310145383, 85.8272988312],
    [0.00000000283, 6.28058228271, 71.8126531507],
    [0.00000000224, 4.61326815024, 611.4430983108],
    [0.00000000219, 2.95055192723, 1230.1427559743],
    [0.00000000215, 4.17227130497, 269.9214467406],
    [0.00000000298, 2.03259740636, 774.0095491696],
    [0.00000000261, 5.84372728728, 77.962992305],
    [0.00000000218, 0.77524052429, 2012.4896924221],
    [0.00000000246, 3.9076579576, 1997.5118388951],
    [0.00000000256, 5.43568842131, 451.9404211107],
    [0.00000000289, 5.47583050493, 2861.753920911],
    [0.00000000222, 5.65303032452, 878.3261636656],
    [0.00000000217, 4.08666045991, 203.7378678824],
    [0.00000000219, 3.76627975418, 2225.7887878601],
    [0.00000000261, 5.98702949469, 1438.0252254409],
    [0.00000000216, 2.79116943185, 417.0369633204],
    [0.00000000284, 2.69954551957, 8432.7643848156],
    [0.00000000217, 2.23660886875, 4649.8988176312],
    [0.00000000209, 1.62042863851, 2115.5824666407],
    [0.00000000207, 1.38014551295, 432.0148168474],
    [0.00000000221, 5.31831352057, 1158.5425511447],
    [0.00000000279, 0.71575424357, 9999.986450773],
    [0.00000000233, 2.824331824, 1937.7080938548],
    [0.00000000251, 5.69364667511, 104.5772469269],
    [0.00000000277, 5.57652122565, 6069.7767545534],
    [0.00000000255, 1.65462437234, 1151.4290041439],
    [0.00000000214, 5.21119625385, 5584.8473325994],
    [0.00000000257, 1.25672828016, 946.727928415],
    [0.00000000257, 0.07224487955, 1595.2926704073],
    [0.00000000206, 1.62962059046, 102.5715093568],
    [0.00000000232, 2.5002064632, 1475.6851803267],
    [0.0000000026, 5.35682168741, 420.9691165835],
    [0.00000000246, 1.89177833812, 2406.7015420318],
    [0.00000000198, 3.71472180547, 108.7218485111],
    [0.00000000236, 5.90186984763, 2218.6752408593],
    [0.00000000233, 6.25571704761, 64.9597385808],
    [0.00000000206, 1.37987751821, 1144.3154571431],
    [0.00000000232, 1.58207616044, 1567.7322542814],
    [0.00000000192, 0.08641216772, 4738.7644978482],
    [0.00000000199, 0.11843486393, 5488.8681053816],
    [0.00000000234, 6.18493232311, 898.7730327907],
    [0.000000002, 4.99582080051, 1474.9344208013],
    [0.00000000181, 2.52492369895, 1901.5326116773],
    [0.0000000018, 4.21309136347, 143.9341228421],
    [0.0000000018, 3.97464243322, 1724.4089984168],
    [0.0000000018, 5.06126965624, 52.6901980395],
    [0.00000000209, 5.67975843693, 48.7580447764],
    [0.00000000183, 4.18036170432, 623.2225117576],
    [0.00000000179, 1.26332044581, 5069.3834615064],
    [0.00000000204, 2.15020295352, 103.6140390804],
    [0.00000000181, 3.31048660611, 560.7104537316],
    [0.00000000183, 3.17358465949, 140.9651774255],
    [0.00000000233, 3.355946296, 951.6232895246],
    [0.00000000181, 3.80687081297, 5092.1519581158],
    [0.00000000219, 4.20704076607, 608.404716925],
    [0.00000000182, 0.53387311099, 2936.3925071264],
    [0.00000000242, 1.89010455595, 3149.6916025644],
    [0.00000000215, 2.37820194064, 543.9180590962],
    [0.00000000212, 1.3281545864, 1467.8208738005],
    [0.00000000241, 0.27977904655, 175.1660598002],
    [0.00000000172, 3.04802064781, 54.3347294422],
    [0.00000000176, 5.74386573654, 1990.3982918943],
    [0.00000000174, 0.76834997096, 949.2237930796],
    [0.00000000171, 2.01470564178, 418.5214360287],
    [0.00000000174, 3.85666452683, 949.12742486],
    [0.00000000215, 0.49235708886, 906.849787638],
    [0.0000000017, 5.11405995173, 754.0357607965],
    [0.00000000172, 4.34691428964, 5798.1464280374],
    [0.00000000184, 5.75236977146, 420.4478517217],
    [0.00000000172, 0.96816531705, 642.3449668688],
    [0.00000000175, 2.5010511816, 1116.0042814918],
    [0.00000000223, 0.11650319998, 67.8804998876],
    [0.00000000186, 3.52408333319, 835.7878940127],
    [0.0000000018, 6.26118151735, 1297.0600480154],
    [0.00000000182, 1.67215353756, 1681.8707287639],
    [0.00000000226, 2.42845288803, 1087.6931058405],
    [0.00000000187, 0.44357184284, 948.2124011233],
    [0.00000000207, 0.49276009333, 71.6002048296],
    [0.00000000183, 4.18155133981, 950.1388168163],
    [0.00000000203, 6.08057186338, 1751.539531416],
    [0.00000000163, 5.30199244423, 131.4039498699],
    [0.00000000158, 2.66874796194, 100.1720129118],
    [0.00000000166, 5.44328910098, 419.4364597654],
    [0.00000000155, 4.15317404535, 4230.414173756],
    [0.00000000185, 5.32521727978, 3178.1457905676],
    [0.00000000152, 5.81549269181, 3870.3033917944],
    [0.0000000018, 4.27946485425, 344.7030453079],
    [0.00000000208, 0.15833308586, 528.2064923863],
    [0.00000000207, 3.01390560456, 5436.9930152402],
    [0.00000000154, 0.20901695434, 144.1465711632],
    [0.00000000151, 3.89233725277, 5695.0536538188],
    [0.0000000015, 4.20842164298, 821.703812363],
    [0.00000000172, 1.780455188, 9161.0171630226],
    [0.00000000156, 4.49891800121, 700.4517908797],
    [0.00000000197, 3.41445472244, 229.0800981171],
    [0.00000000144, 0.69465810831, 2321.7680150779],
    [0.00000000161, 4.69107369482, 1791.3262904579],
    [0.00000000158, 6.18732261629, 208.633228992],
    [0.00000000149, 4.65904096406, 107.7586406646],
    [0.00000000163, 2.18331877101, 1792.0770499833],
    [0.00000000186, 3.14291702228, 915.235359026],
    [0.00000000143, 1.97680291783, 5333.9002410216],
    [0.00000000165, 2.47370848187, 218.7157214094],
    [0.00000000191, 4.45712709859, 2203.6973873323],
    [0.00000000191, 3.1643752195, 874.3940104025],
    [0.00000000195, 3.15846759987, 2457.789647284],
    [0.0000000014, 5.14795840873, 62.038977274],
    [0.00000000163, 5.12768477016, 92.7978334801],
    [0.00000000141, 2.70223003481, 1834.6153196362],
    [0.00000000157, 0.30837392242, 5230.807466803],
    [0.00000000179, 5.89648573233, 1743.3713948336],
    [0.00000000148, 5.47164690902, 632.2624744514],
    [0.0000000016, 6.17204748453, 4628.5581766288],
    [0.00000000155, 2.38849352093, 812.1425848074],
    [0.00000000148, 5.96662169548, 633.305004175],
    [0.00000000174, 1.80305943104, 313.9441891018],
    [0.00000000136, 3.39996980897, 9264.1099372412],
    [0.00000000169, 2.56601482682, 2527.2028039897],
    [0.00000000168, 1.62203994492, 2723.0934116884],
    [0.00000000183, 1.64384875992, 3466.083472221],
    [0.00000000176, 2.96980265691, 36.6053653042],
    [0.00000000163, 3.5486045987, 1282.8329540138],
    [0.00000000181, 4.43697544476, 9367.2027114598],
    [0.00000000179, 2.14519579113, 350.3321196004],
    [0.00000000152, 3.5996530228, 2313.9037085517],
    [0.00000000129, 1.29176271298, 2431.9743362973],
    [0.00000000139, 0.4430131802, 288.0806940053],
    [0.00000000166, 1.47759852249, 1759.8337210689],
    [0.00000000133, 4.28672284594, 927.8349679674],
    [0.00000000127, 4.98154968101, 351.8165923087],
    [0.00000000144, 0.92835956837, 1784.2127434571],
    [0.0000000015, 5.01836454014, 912.7876784712],
    [0.00000000175, 1.08469174308, 1645.6952465864],
    [0.00000000155, 2.97370544817, 357.2332182801],
    [0.00000000128, 2.67675034816, 1546.5346256309],
    [0.00000000127, 4.42428870274, 5908.3527492568],
    [0.00000000162, 5.0189922012, 151.0476698429],
    [0.00000000126, 4.61398030159, 738.3241940866],
    [0.00000000139, 2.33624199397, 89.7594520943],
    [0.00000000128, 2.02062554581, 4966.2906872878],
    [0.00000000146, 2.461884469, 106.0135355254],
    [0.00000000135, 1.09113939367, 1460.7073267997],
    [0.00000000164, 1.89312410778, 354.2642728635],
    [0.00000000128, 5.3481680918, 1194.7180333222],
    [0.00000000167, 2.35750321785, 419.532827985],
    [0.00000000146, 3.76384270222, 1688.2335162393],
    [0.00000000145, 5.61645052451, 920.8644333185],
    [0.0000000013, 6.18571171062, 5055.1563675048],
    [0.00000000134, 4.38142564422, 52705.49724824299],
    [0.00000000118, 0.21997873926, 2211.5616938585],
    [0.00000000165, 4.15661682006, 1514.2912967165],
    [0.00000000127, 5.3373095378, 80.1982245387],
    [0.0000000015, 0.57799100347, 1440.9941708575],
    [0.0000000015, 2.12452867318, 1213.680429739],
    [0.00000000125, 5.294879389, 4841.8572720668],
    [0.00000000122, 2.51137525511, 733.428832977],
    [0.00000000133, 0.77711868923, 69.3649725959],
    [0.00000000116, 5.01348925575, 306.0969289181],
    [0.00000000121, 3.46004011896, 2542.1806575167],
    [0.00000000117, 1.28292214334, 316.4400537664],
    [0.00000000147, 4.65290644717, 946.4672959841],
    [0.00000000118, 4.37005181736, 316.3436855468],
    [0.00000000154, 4.2305781074, 1473.1893156621],
    [0.00000000114, 6.1827937781, 2424.1100297711],
    [0.0000000012, 1.44747960264, 782.3469364478],
    [0.00000000113, 2.46501646312, 118.0706277456],
    [0.0000000015, 5.35605672067, 60.5545045657],
    [0.00000000125, 5.04815063714, 12832.7587417046],
    [0.00000000113, 2.26403435371, 767.3690829208],
    [0.00000000126, 4.3272714317, 109.2431133729],
    [0.00000000132, 1.08011148049, 1812.5239191084],
    [0.00000000126, 2.59338353164, 2254.0999635114],
    [0.00000000112, 4.36277032427, 701.936263588],
    [0.00000000148, 5.19354015248, 1476.1582610787],
    [0.00000000139, 6.08041881775, 1173.5204046717],
    [0.00000000119, 4.96751094502, 5901.239202256],
    [0.00000000142, 0.9878074692, 1263.1197980716],
    [0.00000000129, 0.95662919513, 315.4286618101],
    [0.0000000012, 5.18790645691, 3494.5376602242],
    [0.00000000112, 1.79947955436, 72.3339180125],
    [0.00000000108, 1.08648097652, 5385.775331163],
    [0.00000000115, 3.00254236452, 1432.3961511484],
    [0.00000000105, 3.71621193146, 2040.8008680734],
    [0.00000000137, 3.17973306049, 90.5626012464],
    [0.00000000114, 6.13602809341, 5805.2599750382],
    [0.00000000119, 4.69197244986, 317.3550775031],
    [0.0000000011, 4.64280903824, 110.2545053292],
    [0.00000000118, 4.39110211599, 2107.7181601145],
    [0.0000000012, 3.21638378547, 1152.1797636693],
    [0.00000000143, 2.17164201808, 1404.0849754971],
    [0.00000000145, 1.76223765405, 1090.4014188262],
    [0.00000000111, 3.92512096658, 9146.790069021],
    [0.00000000112, 1.47370143326, 469.8872200543],
    [0.00000000102, 5.89218316655, 683.1863154923],
    [0.0000000012, 4.1593643881, 348.635198571],
    [0.00000000106, 0.44417880718, 2328.8815620787],
    [0.0000000011, 2.49011233322, 5216.5803728014],
    [0.00000000102, 3.87037217926, 4546.8060434126],
    [0.00000000112, 1.39568243289, 1998.2625984205],
    [0.00000000104, 5.44792433684, 2306.7901615509],
    [0.00000000116, 5.70483264669, 88.1149206916],
    [0.00000000133, 2.43058344307, 686.958410061],
    [0.00000000101, 0.16618483973, 102.3420146932],
    [0.00000000119, 0.83752036735, 98.8999885246],
    [0.00000000099, 1.70650194816, 77204.32749453338],
    [0.00000000105, 0.32945050712, 3252.784376783],
    [0.00000000122, 5.65134784228, 2535.0671105159],
    [0.00000000112, 1.8792826717, 2108.4689196399],
    [0.00000000134, 4.89583820209, 125.1841747464],
    [0.000000001, 3.7511296455, 103.843533744],
    [0.0000000013, 6.17707039676, 1216.6493751556],
    [0.00000000133, 1.39324848413, 3782.4753418776],
    [0.00000000123, 3.94647099653, 1826.75101311],
    [0.00000000127, 3.0891850809, 1268.0151591812],
    [0.00000000115, 3.18568947789, 18837.49819713819],
    [0.00000000096, 3.95191803819, 586.3133163972],
    [0.00000000119, 2.98050905366, 1190.7858800591],
    [0.00000000095, 2.26126264437, 2217.9244813339],
    [0.000000001, 0.3017549125, 629.8629780064],
    [0.00000000095, 5.71597047737, 711.4974911436],
    [0.00000000096, 3.59043643487, 1265.5192945166],
    [0.00000000096, 0.50463622008, 1265.6156627362],
    [0.00000000094, 1.72458633291, 734.9133056853],
    [0.00000000099, 0.63063163636, 958.7368365254],
    [0.00000000113, 5.05228373724, 1300.9922012785],
    [0.00000000093, 5.17508060726, 451.7279727896],
    [0.00000000098, 3.96017907988, 1244.226837624],
    [0.00000000122, 5.85840787228, 1489.9122743283],
    [0.00000000097, 4.85659324969, 635.70450062],
    [0.00000000093, 3.86397593508, 939.6143814142],
    [0.00000000092, 0.76676135004, 207.1487562837],
    [0.00000000125, 0.88921756771, 2125.8774073792],
    [0.0000000009, 0.9866992748, 66.70484372],
    [0.00000000121, 5.24853758835, 2579.8930020292],
    [0.00000000101, 2.6396215895, 369.0820676961],
    [0.00000000093, 4.72010143637, 1070.4276304531],
    [0.00000000091, 3.02660235256, 877.1023233882],
    [0.00000000098, 5.46418337977, 736.8397213783],
    [0.00000000105, 6.26002190754, 857.1285350151],
    [0.0000000011, 1.08664620227, 1892.9345919682],
    [0.00000000103, 0.17679607005, 1264.6042707799],
    [0.00000000095, 4.59696488344, 347.4113582936],
    [0.00000000112, 1.35514506436, 3039.485281345],
    [0.00000000116, 0.64613802672, 2442.2692770358],
    [0.00000000106, 5.96002504728, 216.4804891757],
    [0.00000000101, 3.91296753182, 1266.5306864729],
    [0.0000000009, 4.14630453191, 6114.538297694],
    [0.00000000105, 5.1007625386, 228.276948965],
    [0.00000000104, 4.2079396987, 745.4377410874],
    [0.00000000092, 0.50592277699, 2100.6046131137],
    [0.00000000086, 0.13244856687, 6812.766815086],
    [0.0000000011, 2.59360788729, 1065.6017053127],
    [0.00000000112, 5.50588650898, 409.9234163196],
    [0.00000000084, 1.21540928553, 123.5396433437],
    [0.00000000084, 0.42251631607, 2638.1598847345],
    [0.00000000089, 4.19230703868, 1016.8436605363],
    [0.00000000085, 0.99762118926, 420.005908737],
    [0.00000000094, 3.20979467258, 377.1588225434],
    [0.0000000009, 5.15044246367, 735.828329422],
    [0.0000000011, 1.48341807403, 110.1581371096],
    [0.00000000088, 3.76661540369, 320.5846553506],
    [0.00000000083, 3.68342626623, 206.233732547],
    [0.00000000088, 0.79817106412, 1777.0991964563],
    [0.00000000105, 5.18815224808, 3184.3655656911],
    [0.00000000082, 3.98891935237, 563.6312150384],
    [0.00000000084, 4.9204511848, 155997.72788435058],
    [0.00000000112, 1.12342116688, 1809.4855377226],
    [0.00000000088, 4.73396039646, 628.5909536192],
    [0.00000000093, 1.94646595079, 2495.9226829218],
    [0.00000000079, 1.05368384794, 748.406686504],
    [0.00000000091, 4.51649231526, 340.7708920448],
    [0.00000000106, 0.18529263805, 145.6310438715],
    [0.00000000094, 5.92429608615, 4944.9500462854],
    [0.00000000079, 4.05455718371, 256.5881246163],
    [0.00000000079, 0.97858780097, 2748.3662059539],
    [0.00000000078, 3.94078830484, 8962.4553499102],
    [0.00000000078, 2.53880550556, 2151.0071892928],
    [0.00000000093, 3.2983679405, 2630.2955782083],
    [0.000000001, 5.10487609225, 737.3609862401],
    [0.00000000106, 4.57079732012, 441.576044403],
    [0.00000000085, 5.97981273064, 5371.5482371614],
    [0.00000000077, 3.88119157802, 632.0329797878],
    [0.00000000094, 1.45482025244, 16730.4636895958],
    [0.00000000085, 1.53776123716, 1446.62324515],
    [0.00000000085, 4.14113806247, 661.0949149645],
    [0.00000000079, 5.05222779832, 1511.1099029788],
    [0.00000000102, 4.34840197487, 2276.0313053448],
    [0.00000000076, 1.2973333604, 633.5344988386],
    [0.00000000077, 3.967222908, 1138.0956820196],
    [0.00000000076, 4.33474842159, 1054.7160637432],
    [0.00000000101, 4.17063641744, 2520.0892569889],
    [0.00000000103, 0.86014269525, 1962.087116243],
    [0.00000000076, 2.41389413215, 1862.9264952875],
    [0.00000000096, 0.39910598592, 2758.6611466924],
    [0.00000000081, 5.2015116468, 948.654344108],
    [0.00000000079, 5.05410066132, 3810.9295298808],
    [0.00000000104, 3.84096293529, 318.8395502114],
    [0.00000000074, 1.59472464105, 1226.2106027112],
    [0.00000000075, 1.81259444594, 5282.6825569444],
    [0.00000000079, 3.64664894732, 1560.6187072806],
    [0.0000000008, 0.16125746873, 98.4269077726],
    [0.00000000081, 5.69605857725, 949.6968738316],
    [0.00000000098, 5.59321349881, 1806.3041439849],
    [0.00000000073, 0.14074628605, 524.0618908021],
    [0.00000000077, 2.69727302329, 108.50940019],
    [0.00000000095, 3.59944155337, 241.6102710893],
    [0.00000000072, 2.11469804873, 425.1137181677],
    [0.00000000076, 3.77642014284, 6011.4455234754],
    [0.00000000075, 2.23747444878, 1049.8207026336],
    [0.00000000093, 2.88666345436, 1231.6272286826],
    [0.00000000083, 0.48560128335, 206.1373643274],
    [0.00000000093, 1.06113903146, 490.0734567485],
    [0.00000000087, 2.13244170817, 1291.4309737229],
];

const L1: &[Term] = &[
    [529.6909650946, 0.0, 0.0],
    [0.00228875491, 6.02639570653, 7.1135470008],
    [0.00005840251, 4.4273475525, 103.0927742186],
    [0.00004234649, 5.88973718187, 14.2270940016],
    [0.00001827425, 3.98800487338, 419.4846438752],
    [0.00001825678, 5.28404506455, 206.1855484372],
    [0.00001295763, 5.55131472287, 3.1813937377],
    [0.00001163261, 0.51449095629, 3.9321532631],
    [0.00000871623, 5.76336971779, 110.2063212194],
    [0.00000704876, 3.71363806525, 735.8765135318],
    [0.00000659087, 4.82457664565, 213.299095438],
    [0.00000461929, 5.00343499096, 522.5774180938],
    [0.00000401089, 5.73287131668, 95.9792272178],
    [0.00000332869, 3.44120022777, 1052.2683831884],
    [0.00000249868, 2.30701006635, 639.897286314],
    [0.00000266923, 3.51026041015, 426.598190876],
    [0.00000211722, 4.47237642876, 529.6909650946],
    [0.00000213058, 4.72897364149, 838.9692877504],
    [0.00000168683, 3.17195580968, 1368.660252845],
    [0.00000166988, 4.14994417379, 412.3710968744],
    [0.00000177839, 2.83678629232, 625.6701923124],
    [0.00000144843, 0.01084233375, 309.2783226558],
    [0.00000134811, 2.05393435356, 956.2891559706],
    [0.00000143305, 5.43742934205, 199.0720014364],
    [0.0000011589, 4.41725141865, 1155.361157407],
    [0.00000113944, 3.21458797789, 742.9900605326],
    [0.00000089915, 3.86161498874, 728.762966531],
    [0.00000088215, 2.9064808459, 1685.0521225016],
    [0.00000097665, 2.5810745671, 942.062061969],
    [0.00000092415, 2.55246026043, 323.5054166574],
    [0.00000066807, 5.73290392307, 21.3406410024],
    [0.00000073094, 1.79693485385, 1272.6810256272],
    [0.00000067304, 4.12060230021, 1471.7530270636],
    [0.00000056188, 0.86792410225, 1162.4747044078],
    [0.00000054041, 3.58184359867, 1045.1548361876],
    [0.0000005493, 5.4297704113, 10.2949407385],
    [0.00000053442, 5.71996714437, 117.3198682202],
    [0.00000046754, 2.64548179882, 2001.4439921582],
    [0.00000051717, 2.3279450434, 1258.4539316256],
    [0.00000054, 2.97675389552, 1059.3819301892],
    [0.00000044977, 0.58304318016, 1478.8665740644],
    [0.00000046879, 5.14616452732, 515.463871093],
    [0.00000039927, 3.82778576668, 1788.1448967202],
    [0.00000039672, 1.54045597287, 1589.0728952838],
    [0.00000032999, 3.3078074047, 1361.5467058442],
    [0.00000030075, 0.30778452878, 1795.258443721],
    [0.0000002941, 3.35934289173, 4.665866446],
    [0.00000026741, 4.84893937214, 220.4126424388],
    [0.00000028149, 0.76352063663, 88.865680217],
    [0.00000030444, 2.6918775314, 1375.7737998458],
    [0.00000024948, 2.3892031097, 2317.8358618148],
    [0.00000026582, 2.0872043778, 1574.8458012822],
    [0.00000023829, 3.53984805113, 2104.5367663768],
    [0.00000026803, 4.85993785788, 831.8557407496],
    [0.00000021299, 0.13873096501, 302.164775655],
    [0.00000020033, 3.03882094977, 1677.9385755008],
    [0.00000018636, 0.03695015738, 2111.6503133776],
    [0.00000021446, 1.29119799558, 1905.4647649404],
    [0.00000017721, 5.95520032413, 5.4166259714],
    [0.00000019013, 2.29928735716, 1692.1656695024],
    [0.00000015188, 3.0356014835, 846.0828347512],
    [0.00000014436, 0.91597521582, 18.1592472647],
    [0.0000001712, 4.56563575993, 1148.2476104062],
    [0.0000001335, 2.13798234945, 2634.2277314714],
    [0.00000014206, 3.25688339284, 2420.9286360334],
    [0.00000014122, 0.63049757413, 2.9207613068],
    [0.00000013249, 1.86484100618, 1891.2376709388],
    [0.00000012016, 2.77504558114, 1994.3304451574],
    [0.00000011074, 6.05235617491, 2428.0421830342],
    [0.00000011588, 1.05476059895, 2221.856634597],
    [0.00000011298, 4.27759798848, 1464.6394800628],
    [0.00000010496, 1.27766232631, 632.7837393132],
    [0.00000012313, 1.95530354986, 2008.557539159],
    [0.0000000843, 2.97881108467, 2737.32050569],
    [0.0000000715, 1.89211612318, 2950.619601128],
    [0.00000007108, 2.51668187306, 2310.722314814],
    [0.00000007067, 1.01668860062, 536.8045120954],
    [0.0000000671, 2.41192989219, 4.192785694],
    [0.00000006406, 5.78722698391, 2744.4340526908],
    [0.00000006371, 1.67131282392, 2207.6295405954],
    [0.00000007468, 3.99306355004, 1781.0313497194],
    [0.00000007262, 3.04822138982, 316.3918696566],
    [0.00000008019, 1.62577587965, 2324.9494088156],
    [0.00000007171, 6.21036725527, 11.0457002639],
    [0.00000005677, 1.75838561003, 380.12776796],
    [0.00000006212, 0.83301627323, 2538.2485042536],
    [0.000000057, 3.1156153919, 1485.9801210652],
    [0.00000004972, 2.70516122494, 3053.7123753466],
    [0.00000005149, 2.86261420893, 1802.3719907218],
    [0.00000004145, 2.26403608926, 2627.1141844706],
    [0.00000004213, 4.31092129765, 405.2575498736],
    [0.00000004896, 3.71238219888, 2097.423219376],
    [0.00000005177, 1.31063427191, 2641.3412784722],
    [0.00000003828, 1.65198910536, 3267.0114707846],
    [0.00000004765, 5.60515461467, 191.9584544356],
    [0.00000003634, 5.52455802454, 3060.8259223474],
    [0.00000003793, 2.23081088848, 6283.0758499914],
    [0.00000003596, 3.65470900107, 10213.285546211],
    [0.0000000436, 3.32039058638, 1169.5882514086],
    [0.00000003992, 2.60205048133, 2118.7638603784],
    [0.00000003698, 2.932012977, 32.2433289144],
    [0.00000003845, 0.1539815586, 853.196381752],
    [0.00000003665, 3.86254376849, 1265.5674786264],
    [0.00000003781, 2.53672149952, 74.7815985673],
    [0.00000003144, 4.00910061066, 721.6494195302],
    [0.00000002941, 5.72527100924, 99.9113804809],
    [0.00000003359, 3.59343056079, 1581.959348283],
    [0.00000002938, 1.52668797644, 2524.021410252],
    [0.00000002959, 5.50558866265, 107.0249274817],
    [0.0000000282, 3.30910532287, 0.7507595254],
    [0.00000002914, 2.43599926365, 3370.1042450032],
    [0.00000002697, 4.32483664541, 106.2741679563],
    [0.00000003171, 3.43540353027, 2413.8150890326],
    [0.00000003295, 1.00729921111, 2957.7331481288],
    [0.00000003316, 0.62988382475, 2854.6403739102],
    [0.00000002844, 2.34119089584, 2435.155730035],
    [0.00000002384, 2.01780162336, 2943.5060541272],
    [0.00000002637, 3.32129274394, 1898.3512179396],
    [0.00000002305, 3.72856029255, 1038.0412891868],
    [0.00000002614, 4.09710922017, 949.1756089698],
    [0.00000002791, 0.04685866941, 750.1036075334],
    [0.00000002048, 1.41760392475, 3583.4033404412],
    [0.00000002031, 5.26425996648, 3377.217792004],
    [0.0000000195, 0.74953640184, 142.4496501338],
    [0.00000001972, 3.99086545624, 24.3790223882],
    [0.00000002485, 6.03287773162, 1066.49547719],
    [0.0000000182, 1.2495863126, 81.7521332162],
    [0.00000002061, 4.32724509638, 70.8494453042],
    [0.00000001971, 4.02523935323, 92.0470739547],
    [0.00000001772, 0.33058541841, 35.4247226521],
    [0.00000001957, 5.01460009554, 99.1606209555],
    [0.00000001753, 5.9802257221, 114.1384744825],
    [0.00000001883, 4.86708930172, 124.433415221],
    [0.00000001925, 0.29071069563, 31.019488637],
    [0.00000002027, 3.16216148511, 2730.2069586892],
    [0.00000001905, 3.04876751223, 2214.7430875962],
    [0.00000001649, 2.05588075352, 628.8515860501],
    [0.00000002065, 0.7132084306, 3274.1250177854],
    [0.00000001922, 2.08206186624, 2751.5475996916],
    [0.00000001629, 3.45769298416, 1354.4331588434],
    [0.00000001568, 3.32408312866, 629.6023455755],
    [0.00000001696, 2.17098688976, 3686.4961146598],
    [0.00000001953, 5.09846435762, 17.4084877393],
    [0.00000001718, 5.84352668064, 305.3461693927],
    [0.00000001521, 4.8262022502, 227.5261894396],
    [0.00000001597, 5.88399398858, 217.2312487011],
    [0.00000001937, 5.76970207039, 1382.8873468466],
    [0.00000001971, 5.29620231137, 508.3503240922],
    [0.00000001483, 1.81408046339, 635.9651330509],
    [0.00000001793, 3.47773797345, 835.0371344873],
    [0.00000001446, 3.158027711, 25.1297819136],
    [0.00000001475, 4.82855249308, 1279.794572628],
    [0.00000001385, 3.82633243222, 12036.4607348882],
    [0.00000001472, 0.83054329964, 28.3111756513],
    [0.00000001372, 3.0599541511, 636.7158925763],
    [0.00000001517, 5.69909541102, 210.1177017003],
    [0.00000001353, 1.77885144771, 3259.8979237838],
    [0.0000000141, 5.1020993943, 963.4027029714],
    [0.00000001479, 4.39407185681, 423.4167971383],
    [0.00000001303, 1.47171272856, 2840.4132799086],
    [0.00000001768, 0.4482609026, 3171.0322435668],
    [0.00000001188, 2.24279458264, 31.492569389],
    [0.00000001233, 2.06153814334, 453.424893819],
    [0.00000001304, 2.77892889624, 2531.1349572528],
    [0.00000001121, 5.00694591749, 3693.6096616606],
    [0.00000001094, 1.19006366207, 3899.7952100978],
    [0.0000000117, 4.58006672746, 1596.1864422846],
    [0.00000001248, 1.8280902629, 3067.9394693482],
    [0.00000001108, 3.19411770894, 1670.8250285],
    [0.00000001068, 0.28970784179, 295.0512286542],
    [0.00000001279, 2.89269344203, 3046.5988283458],
    [0.00000001073, 0.06943774274, 5223.6939198022],
    [0.00000001275, 0.42648604467, 3590.516887442],
    [0.00000001074, 1.50184004744, 9153.9036160218],
    [0.00000001391, 5.3577636945, 1699.2792165032],
    [0.00000001151, 5.5615259137, 46.470422916],
    [0.00000001344, 5.00175448908, 824.7421937488],
    [0.00000001157, 0.48479332479, 67.6680515665],
    [0.00000001027, 0.20709586018, 7.8643065262],
    [0.00000001102, 4.53785274556, 5746.271337896],
    [0.00000001094, 4.05379250462, 5760.4984318976],
    [0.00000001058, 5.96058860092, 9676.4810341156],
    [0.00000001054, 5.47653057024, 9690.7081281172],
    [0.00000000915, 0.93813435737, 433.7117378768],
    [0.00000000897, 1.77750764321, 945.2434557067],
    [0.0000000098, 1.90987197604, 4002.8879843164],
    [0.00000000888, 5.41919255529, 28.4541880032],
    [0.00000000922, 3.06680292139, 422.6660376129],
    [0.00000000869, 3.05105515498, 945.9942152321],
    [0.00000001049, 4.95146098869, 2015.6710861598],
    [0.00000000882, 5.88163978224, 203.0041546995],
    [0.00000000858, 5.29099940226, 149.5631971346],
    [0.00000001128, 4.60331371157, 416.3032501375],
    [0.00000000858, 2.36620413188, 330.6189636582],
    [0.00000000823, 2.92357502068, 6151.533888305],
    [0.00000000912, 2.80494184378, 6.2197751235],
    [0.00000000787, 1.53829267228, 952.3570027075],
    [0.00000000878, 5.76532521399, 1.6445314027],
    [0.00000000947, 0.29073803639, 3487.4241132234],
    [0.00000000826, 4.34454961053, 1912.5783119412],
    [0.00000000859, 2.51135450872, 2847.5268269094],
    [0.00000000773, 2.76910110675, 934.9485149682],
    [0.00000000744, 0.58381524297, 25.2727942655],
    [0.00000000758, 1.54835465034, 3576.2897934404],
    [0.00000000743, 2.78275608127, 953.1077622329],
    [0.00000000756, 2.67599117952, 38.1330356378],
    [0.00000000988, 4.70939903761, 1141.1340634054],
    [0.00000000709, 0.36937921616, 69.1525242748],
    [0.00000000795, 4.55356429398, 2332.0629558164],
    [0.00000000749, 3.06875482517, 39.3568759152],
    [0.00000000726, 2.93868510726, 1987.2168981566],
    [0.00000000763, 4.07150469736, 739.8086667949],
    [0.00000000787, 1.5782979785, 3384.3313390048],
    [0.00000000751, 3.06524097269, 408.4389436113],
    [0.00000000661, 2.12961840705, 621.7380390493],
    [0.00000000797, 2.62654905883, 3362.9906980024],
    [0.00000000776, 0.14525661131, 3906.9087570986],
    [0.00000000616, 5.03867211938, 19896.8801273274],
    [0.00000000612, 4.75246720104, 4010.0015313172],
    [0.0000000069, 6.20635396565, 902.7051860538],
    [0.00000000778, 4.23401238281, 195.1398481733],
    [0.00000000599, 2.98989831433, 643.8294395771],
    [0.0000000066, 5.69260136324, 916.9322800554],
    [0.00000000584, 0.96897033221, 4216.1870797544],
    [0.00000000571, 5.58352505233, 430.5303441391],
    [0.00000000715, 4.31246176454, 209.3669421749],
    [0.00000000568, 2.08443359888, 319.5732633943],
    [0.00000000598, 4.17964877442, 2648.454825473],
    [0.00000000585, 1.57267526063, 3156.8051495652],
    [0.00000000616, 3.74824009285, 51646.11531805379],
    [0.00000000722, 5.1822661264, 1.4844727083],
    [0.0000000073, 4.42397697289, 1457.525933062],
    [0.00000000526, 2.76312717412, 415.5524906121],
    [0.00000000639, 1.10314898612, 760.25553592],
    [0.00000000525, 3.19320729672, 202.2533951741],
    [0.00000000564, 1.65321822214, 4319.279853973],
    [0.00000000512, 2.42984295322, 312.4597163935],
    [0.00000000495, 1.50044091948, 1261.6353253633],
    [0.00000000551, 4.12101714867, 2228.9701815978],
    [0.0000000055, 2.24703059796, 3163.918696566],
    [0.00000000483, 2.78164038007, 1262.3860848887],
    [0.00000000553, 3.55492797003, 230.5645708254],
    [0.00000000609, 4.31134239225, 732.6951197941],
    [0.00000000513, 0.155842925, 3803.81598288],
    [0.00000000461, 2.692354773, 2303.6087678132],
    [0.00000000435, 2.74242970624, 1251.3403846248],
    [0.00000000485, 1.33501081337, 3700.7232086614],
    [0.00000000439, 3.83203915392, 2964.8466951296],
    [0.00000000422, 1.26184172303, 1268.7488723641],
    [0.00000000446, 3.76183342688, 1056.2005364515],
    [0.00000000465, 5.40046616682, 526.5095713569],
    [0.00000000429, 2.77075855201, 739.0579072695],
    [0.00000000419, 1.32727880655, 3892.681663097],
    [0.00000000402, 2.50770817049, 1269.4996318895],
    [0.00000000422, 3.81574223211, 1439.5096981492],
    [0.00000000491, 2.36540257694, 3679.382567659],
    [0.00000000449, 1.11025874783, 56.6223513026],
    [0.00000000531, 4.14304337901, 1773.9178027186],
    [0.00000000405, 5.58413254484, 533.6231183577],
    [0.00000000466, 6.15216183845, 4223.3006267552],
    [0.00000000418, 1.72255306933, 245.5424243524],
    [0.00000000371, 2.74831264051, 724.8308132679],
    [0.00000000446, 4.91072041938, 1289.9465010146],
    [0.00000000355, 1.65214517717, 78.7137518304],
    [0.00000000344, 3.65107129989, 313.2104759189],
    [0.00000000341, 1.81025813535, 938.1299087059],
    [0.00000000347, 2.65302138, 960.2213092337],
    [0.00000000331, 4.50079627501, 4326.3934009738],
    [0.00000000418, 5.44219391486, 113.3877149571],
    [0.00000000318, 0.50425143179, 458.8415197904],
    [0.00000000325, 4.88195076309, 26087.9031415742],
    [0.00000000315, 3.50341228352, 3281.2385647862],
    [0.00000000344, 1.98501947615, 3480.3105662226],
    [0.00000000311, 0.75485741628, 4532.578949411],
    [0.00000000353, 3.92195766081, 2545.3620512544],
    [0.00000000325, 0.5499159094, 43.2890291783],
    [0.00000000321, 0.31160908173, 3340.6124266998],
    [0.00000000297, 1.6532681734, 1357.6145525811],
    [0.00000000293, 1.37420042707, 387.2413149608],
    [0.00000000321, 1.40065434057, 4635.6717236296],
    [0.00000000372, 4.0236336002, 1049.0869894507],
    [0.00000000297, 5.59122988877, 519.3960243561],
    [0.00000000286, 2.4715406394, 731.9443602687],
    [0.00000000278, 5.49867189646, 280.9671470045],
    [0.00000000272, 1.22812385215, 1578.0271950199],
    [0.00000000378, 3.86607274501, 2090.3096723752],
    [0.00000000282, 0.51712056615, 77734.01845962799],
    [0.00000000269, 0.02959698196, 611.4430983108],
    [0.00000000284, 0.04049903354, 4120.2078525366],
    [0.00000000293, 1.09849207612, 4017.115078318],
    [0.00000000282, 2.45726524478, 2620.0006374698],
    [0.00000000266, 2.52015865985, 1578.7779545453],
    [0.00000000269, 3.92616563946, 42.5382696529],
    [0.00000000312, 1.83039612824, 3473.1970192218],
    [0.0000000031, 3.73463721928, 827.9235874865],
    [0.00000000268, 3.46107327901, 1372.5924061081],
    [0.00000000245, 1.24462022703, 252.6559713532],
    [0.00000000244, 1.07342182953, 569.0478410098],
    [0.00000000298, 2.10561139774, 3995.7744373156],
    [0.00000000247, 6.25857290811, 647.0108333148],
    [0.00000000237, 2.47045243134, 1055.4497769261],
    [0.00000000277, 5.87881959877, 4539.6924964118],
    [0.00000000225, 0.98890645312, 1585.1407420207],
    [0.0000000025, 5.12961392395, 842.9014410135],
    [0.0000000025, 1.38131077367, 1371.8416465827],
    [0.0000000023, 1.11800747987, 4209.0735327536],
    [0.0000000022, 3.1926232251, 3597.6304344428],
    [0.00000000284, 4.23488093199, 2200.5159935946],
    [0.00000000215, 2.24027399964, 1585.8915015461],
    [0.00000000252, 2.3218903936, 618.5566453116],
    [0.00000000213, 2.02952719032, 3789.5888888784],
    [0.00000000244, 4.5898671558, 76.2660712756],
    [0.00000000282, 4.06566650574, 2516.9078632512],
    [0.00000000225, 4.22852853034, 1884.124123938],
    [0.00000000215, 2.4305047701, 1041.2226829245],
    [0.00000000227, 0.78540106439, 59.8037450403],
    [0.00000000194, 5.95527748977, 84.9335269539],
    [0.00000000204, 5.30703948894, 850.0149880143],
    [0.00000000264, 3.59284211896, 2406.7015420318],
    [0.00000000245, 3.84636439938, 2833.2997329078],
    [0.00000000212, 1.72793441263, 3796.7024358792],
    [0.00000000201, 2.33416232911, 1276.6131788903],
    [0.00000000188, 5.1517354414, 746.9222137957],
    [0.00000000188, 0.90737461702, 135.336103133],
    [0.00000000183, 2.00517103414, 1364.7280995819],
    [0.00000000224, 5.29768885072, 224.3447957019],
    [0.00000000232, 3.74069331802, 1365.4788591073],
    [0.00000000178, 1.49602834914, 1254.5217783625],
    [0.00000000184, 0.71277176813, 92.7978334801],
    [0.00000000222, 3.74692279, 2861.753920911],
    [0.00000000183, 3.1330989678, 842.1506814881],
    [0.00000000177, 4.25170889929, 4642.7852706304],
    [0.00000000233, 3.91422511741, 511.5317178299],
    [0.00000000174, 2.18395108914, 1048.3362299253],
    [0.00000000175, 3.26288436468, 9492.1463150048],
    [0.00000000173, 5.29536944168, 835.7878940127],
    [0.00000000186, 0.26083656247, 976.0023119128],
    [0.00000000175, 0.86826772839, 4333.5069479746],
    [0.00000000165, 2.87286922702, 518.6452648307],
    [0.00000000183, 1.15158982617, 4952.0635932862],
    [0.00000000161, 5.99117116645, 927.8349679674],
    [0.00000000166, 0.54734839799, 4848.9708190676],
    [0.00000000161, 6.2202605932, 4436.5997221932],
    [0.00000000158, 2.05295267009, 4105.980758535],
    [0.00000000178, 6.0297044832, 990.2294059144],
    [0.00000000196, 3.60780662425, 3149.6916025644],
    [0.00000000169, 2.23236992901, 2936.3925071264],
    [0.00000000193, 2.51947025722, 1215.1649024473],
    [0.00000000164, 3.86315708253, 327.4375699205],
    [0.00000000195, 0.77569007279, 543.9180590962],
    [0.00000000162, 3.17478750276, 1688.9842757647],
    [0.00000000163, 2.5638548585, 373.0142209592],
    [0.0000000015, 2.89523657558, 3914.0223040994],
    [0.00000000145, 2.26885219529, 1895.1698242019],
    [0.00000000179, 1.85169576503, 4312.1663069722],
    [0.00000000173, 4.70951058499, 1159.2933106701],
    [0.00000000139, 0.25920206827, 775.233389447],
    [0.00000000141, 5.12388130771, 298.2326223919],
    [0.0000000014, 3.5746097338, 944.9828232758],
    [0.00000000184, 1.35359259805, 105.5404547734],
    [0.00000000174, 3.38805636151, 1567.7322542814],
    [0.00000000145, 3.09459411652, 320.3240229197],
    [0.00000000139, 3.69661478857, 437.6438911399],
    [0.00000000163, 5.61244147243, 4856.0843660684],
    [0.0000000018, 3.32102465227, 2723.0934116884],
    [0.00000000151, 1.23328481957, 155.7829722581],
    [0.00000000149, 5.35643328126, 362.8622925726],
    [0.00000000165, 4.07152425771, 77.962992305],
    [0.00000000146, 5.02080858459, 685.4739373527],
    [0.00000000148, 3.35826994203, 3466.083472221],
    [0.00000000119, 0.7214032875, 1901.5326116773],
    [0.00000000152, 0.00285841215, 1894.4190646765],
    [0.00000000119, 0.50788084088, 306.0969289181],
    [0.00000000119, 5.66637527171, 1244.226837624],
    [0.00000000119, 1.32907087281, 121.2520214833],
    [0.00000000128, 1.4718053595, 4113.0943055358],
    [0.00000000123, 1.22310111882, 355.7487455718],
    [0.00000000114, 1.97585632324, 1902.2833712027],
    [0.00000000145, 3.46300445755, 1681.8707287639],
    [0.00000000124, 0.92552830292, 4525.4654024102],
    [0.00000000123, 2.98200413417, 6275.9623029906],
    [0.00000000115, 1.10609664198, 10742.9765113056],
    [0.00000000115, 1.95884405953, 4422.3726281916],
    [0.00000000113, 4.2212448737, 1512.8068240082],
    [0.00000000109, 0.82319170562, 885.4397106664],
    [0.00000000124, 4.85228658821, 1166.4068576709],
    [0.00000000115, 2.01922259091, 1593.0050485469],
    [0.00000000122, 1.37413442519, 561.934294009],
    [0.00000000123, 4.75711524624, 447.7958195265],
    [0.00000000112, 4.9944344765, 1152.1797636693],
    [0.0000000011, 1.47530451975, 12566.1516999828],
    [0.00000000116, 4.40489805544, 10206.1719992102],
    [0.00000000102, 3.56832987628, 103821.92160120218],
    [0.00000000101, 4.9365707338, 483.2205421786],
    [0.00000000113, 4.29129529512, 462.0229135281],
    [0.000000001, 2.60761892266, 4230.414173756],
    [0.00000000139, 3.59802622173, 3178.1457905676],
    [0.00000000103, 0.64456951043, 4649.8988176312],
    [0.00000000096, 5.22024259305, 597.3590166611],
    [0.00000000127, 3.98362107831, 525.7588118315],
    [0.00000000097, 0.45534131072, 72.0732855816],
    [0.00000000099, 4.17247069808, 131.5469622218],
    [0.00000000094, 1.19466989637, 1570.9136480191],
    [0.00000000094, 6.11617785966, 4752.9915918498],
    [0.00000000096, 5.35082229858, 1560.6187072806],
    [0.00000000094, 4.00607575809, 4959.177140287],
    [0.00000000122, 4.35868668537, 1475.6851803267],
    [0.00000000104, 3.07689792918, 378.6432952517],
    [0.00000000097, 2.8989143505, 2005.3761454213],
    [0.00000000103, 0.90631101567, 5268.4554629428],
    [0.00000000118, 0.06401826968, 1744.8558675419],
    [0.00000000107, 3.10553339327, 3782.4753418776],
    [0.00000000121, 3.05702143217, 3039.485281345],
    [0.00000000087, 0.28474445804, 421.93232443],
    [0.00000000097, 2.02888336377, 3252.784376783],
    [0.00000000097, 0.9043005646, 25551.09862947879],
    [0.00000000097, 0.42023992683, 25565.3257234804],
    [0.00000000095, 1.21517554151, 63.7358983034],
    [0.00000000098, 1.62836661812, 454.9093665273],
    [0.0000000009, 1.56881835577, 909.8187330546],
    [0.00000000092, 0.09476787184, 604.4725636619],
    [0.00000000085, 2.74937522823, 25028.521211385],
    [0.00000000091, 2.70438319792, 2803.8079146044],
    [0.00000000091, 2.2203233523, 2818.035008606],
    [0.00000000083, 1.37128855802, 52175.8062831484],
];

const L2: &[Term] = &[
    [0.00047224495, 4.32142959829, 7.1135470008],
    [0.00014837133, PI, 0.0],
    [0.0000171976, 4.18704068143, 14.2270940016],
    [0.00000352955, 6.05833758121, 103.0927742186],
    [0.00000337361, 3.78651279871, 3.1813937377],
    [0.00000254166, 0.70387604, 206.1855484372],
    [0.00000197466, 2.48373814311, 3.9321532631],
    [0.00000128563, 5.76662093074, 419.4846438752],
    [0.00000098036, 4.04968916036, 110.2063212194],
    [0.00000088275, 1.102382812, 95.9792272178],
    [0.00000064391, 0.44147043298, 522.5774180938],
    [0.00000050637, 5.54632378849, 735.8765135318],
    [0.00000051597, 0.62029647051, 639.897286314],
    [0.00000045706, 3.13360877148, 213.299095438],
    [0.00000045605, 5.85088946022, 412.3710968744],
    [0.00000040136, 4.02164188457, 21.3406410024],
    [0.0000004874, 0.84992673237, 199.0720014364],
    [0.00000036795, 4.55405659012, 625.6701923124],
    [0.00000038286, 1.82452408192, 426.598190876],
    [0.00000029959, 1.70922336282, 309.2783226558],
    [0.00000027713, 0.36750730026, 956.2891559706],
    [0.00000029307, 3.60719531618, 10.2949407385],
    [0.00000024606, 5.56973619678, 728.762966531],
    [0.00000024463, 5.32577397738, 1052.2683831884],
    [0.00000029782, 0.18869550909, 838.9692877504],
    [0.00000031525, 5.71995067754, 632.7837393132],
    [0.00000020265, 4.30501691058, 942.062061969],
    [0.00000019582, 0.86319871092, 323.5054166574],
    [0.00000014583, 2.9036399835, 529.6909650946],
    [0.00000014784, 5.29549669537, 1045.1548361876],
    [0.00000015018, 0.1133582091, 1272.6810256272],
    [0.00000015067, 3.99870652255, 117.3198682202],
    [0.00000016238, 6.16676588681, 1155.361157407],
    [0.00000018083, 5.45776982937, 949.1756089698],
    [0.00000012774, 2.52069890516, 88.865680217],
    [0.0000001641, 1.53158344633, 742.9900605326],
    [0.00000012715, 5.10728825051, 1368.660252845],
    [0.00000015946, 0.56426609136, 515.463871093],
    [0.00000010741, 4.05854892957, 1258.4539316256],
    [0.00000009035, 5.02672579948, 1361.5467058442],
    [0.00000008664, 1.84006040485, 302.164775655],
    [0.00000009458, 5.88107012381, 1471.7530270636],
    [0.00000008141, 6.14375625949, 1589.0728952838],
    [0.00000010226, 5.1928996954, 1265.5674786264],
    [0.0000000727, 3.14009750202, 220.4126424388],
    [0.00000009159, 5.97738471749, 316.3918696566],
    [0.00000009122, 0.28305963851, 831.8557407496],
    [0.00000006846, 4.89138148751, 1685.0521225016],
    [0.00000008034, 1.27255252674, 1059.3819301892],
    [0.00000005535, 3.82588254125, 1574.8458012822],
    [0.0000000549, 4.76295317584, 1677.9385755008],
    [0.00000005633, 5.59907674658, 1788.1448967202],
    [0.0000000422, 5.28590160056, 18.1592472647],
    [0.0000000578, 4.93235814367, 1581.959348283],
    [0.00000005831, 6.27541912522, 1148.2476104062],
    [0.00000004393, 5.8971942435, 1905.4647649404],
    [0.0000000387, 5.75134775005, 1162.4747044078],
    [0.00000003751, 4.67893119144, 2001.4439921582],
    [0.00000004518, 0.99526423272, 1375.7737998458],
    [0.00000003296, 4.50488301622, 1994.3304451574],
    [0.00000003244, 5.51491417555, 1478.8665740644],
    [0.00000003851, 5.99106028182, 1464.6394800628],
    [0.00000003378, 5.32226405653, 2104.5367663768],
    [0.00000002767, 3.61342616176, 1891.2376709388],
    [0.00000003252, 4.67631297628, 1898.3512179396],
    [0.00000002616, 1.01316581165, 191.9584544356],
    [0.0000000226, 5.29058679616, 1795.258443721],
    [0.00000002356, 5.66303594941, 2221.856634597],
    [0.00000002851, 0.67129086942, 1692.1656695024],
    [0.00000001952, 4.25159100532, 2310.722314814],
    [0.00000002076, 4.46970490997, 2317.8358618148],
    [0.00000002546, 5.70947182865, 1781.0313497194],
    [0.00000001998, 6.00050815612, 405.2575498736],
    [0.00000001931, 5.65547149239, 536.8045120954],
    [0.00000002024, 5.05094798369, 2420.9286360334],
    [0.0000000145, 4.72055073033, 32.2433289144],
    [0.00000001464, 5.06858821102, 2111.6503133776],
    [0.00000001493, 5.70575740236, 721.6494195302],
    [0.0000000182, 4.42495654957, 2214.7430875962],
    [0.00000001337, 3.4316598479, 2207.6295405954],
    [0.00000001831, 0.37531035287, 2008.557539159],
    [0.00000001669, 5.43170588315, 2097.423219376],
    [0.0000000147, 1.53802227379, 1485.9801210652],
    [0.00000001332, 1.2845243978, 1802.3719907218],
    [0.0000000114, 4.0046771051, 2627.1141844706],
    [0.0000000125, 5.44238973539, 2538.2485042536],
    [0.00000001104, 2.97116213566, 81.7521332162],
    [0.00000001095, 5.42911299056, 1038.0412891868],
    [0.00000001015, 3.05383669443, 124.433415221],
    [0.00000001157, 4.26309665633, 2634.2277314714],
    [0.00000001025, 3.75336760335, 28.4541880032],
    [0.00000001207, 4.78534273445, 2737.32050569],
    [0.00000000953, 1.1741993079, 99.9113804809],
    [0.0000000109, 0.70669110862, 508.3503240922],
    [0.00000001034, 1.02530578476, 2118.7638603784],
    [0.00000001107, 1.75462104166, 1169.5882514086],
    [0.00000001182, 0.08983114697, 2324.9494088156],
    [0.00000000911, 4.84804705858, 2428.0421830342],
    [0.00000000946, 4.8537040211, 853.196381752],
    [0.00000000927, 2.12970727362, 846.0828347512],
    [0.00000001082, 5.15776728286, 2413.8150890326],
    [0.00000001012, 4.17918834946, 2531.1349572528],
    [0.00000000747, 3.12849224199, 227.5261894396],
    [0.00000000772, 5.16112160695, 1354.4331588434],
    [0.00000000946, 4.62669564433, 750.1036075334],
    [0.00000000649, 1.99335419761, 295.0512286542],
    [0.00000000674, 2.67094753626, 106.2741679563],
    [0.00000000622, 3.30124340788, 2524.021410252],
    [0.00000000736, 0.76627172692, 2435.155730035],
    [0.00000000657, 3.76456378942, 2943.5060541272],
    [0.0000000084, 4.33066942571, 1066.49547719],
    [0.00000000741, 0.4192360607, 824.7421937488],
    [0.00000000597, 3.13150519862, 1279.794572628],
    [0.00000000716, 4.52527450071, 3053.7123753466],
    [0.00000000572, 3.41451923474, 963.4027029714],
    [0.00000000757, 6.09495847137, 2641.3412784722],
    [0.00000000658, 5.23912867911, 2854.6403739102],
    [0.00000000648, 4.05789087865, 2950.619601128],
    [0.00000000511, 1.1248924805, 107.0249274817],
    [0.00000000553, 4.62560119756, 2744.4340526908],
    [0.00000000692, 4.88727934059, 2730.2069586892],
    [0.00000000524, 4.89826603504, 1670.8250285],
    [0.00000000645, 4.06153239491, 1382.8873468466],
    [0.00000000472, 2.87852021211, 1596.1864422846],
    [0.00000000473, 5.10881231207, 629.6023455755],
    [0.00000000559, 3.93929557567, 2847.5268269094],
    [0.0000000054, 0.12975752273, 1141.1340634054],
    [0.00000000497, 0.51266762413, 2751.5475996916],
    [0.00000000442, 0.03137098873, 635.9651330509],
    [0.00000000396, 1.24620901978, 210.1177017003],
    [0.00000000386, 1.38334747428, 203.0041546995],
    [0.00000000384, 0.65817242488, 330.6189636582],
    [0.00000000474, 3.67011260621, 1699.2792165032],
    [0.00000000373, 3.53254310361, 3259.8979237838],
    [0.00000000478, 5.82346267918, 2957.7331481288],
    [0.00000000422, 4.26925201809, 3370.1042450032],
    [0.00000000405, 0.10837709952, 416.3032501375],
    [0.00000000398, 6.1298466985, 1457.525933062],
    [0.00000000333, 2.63916008485, 1912.5783119412],
    [0.00000000343, 4.64208332684, 1987.2168981566],
    [0.00000000437, 4.62109091309, 3046.5988283458],
    [0.0000000036, 3.28985245902, 2015.6710861598],
    [0.00000000312, 3.084354819, 380.12776796],
    [0.00000000309, 4.47767330721, 934.9485149682],
    [0.0000000033, 4.40286760804, 3060.8259223474],
    [0.00000000365, 3.85654100147, 3267.0114707846],
    [0.00000000323, 0.26164947208, 3067.9394693482],
    [0.00000000281, 3.25988843314, 2840.4132799086],
    [0.00000000343, 5.05607540959, 3171.0322435668],
    [0.00000000307, 3.70427033613, 3163.918696566],
    [0.00000000252, 5.51885663274, 433.7117378768],
    [0.00000000273, 2.92130256682, 2332.0629558164],
    [0.00000000262, 4.8378952893, 945.9942152321],
    [0.00000000246, 0.14335509676, 628.8515860501],
    [0.00000000289, 5.84994756179, 1773.9178027186],
    [0.00000000303, 2.43034118485, 70.8494453042],
    [0.00000000232, 6.04085704318, 952.3570027075],
    [0.00000000219, 5.01917439751, 636.7158925763],
    [0.00000000299, 5.55569320048, 3274.1250177854],
    [0.00000000299, 6.26518931252, 423.4167971383],
    [0.00000000221, 2.41159552964, 2228.9701815978],
    [0.00000000196, 1.22788068022, 422.6660376129],
    [0.00000000217, 4.39685211804, 2303.6087678132],
    [0.00000000272, 4.35701626571, 3362.9906980024],
    [0.00000000204, 2.57190521895, 2648.454825473],
    [0.0000000021, 3.30965635396, 3576.2897934404],
    [0.00000000247, 4.01996671087, 3686.4961146598],
    [0.00000000188, 6.00513628275, 92.0470739547],
    [0.00000000246, 3.82791598232, 113.3877149571],
    [0.00000000224, 6.09324436831, 732.6951197941],
    [0.00000000201, 3.43068360495, 99.1606209555],
    [0.00000000202, 0.01235649582, 3384.3313390048],
    [0.00000000172, 4.44831036138, 1251.3403846248],
    [0.00000000171, 1.72236953368, 611.4430983108],
    [0.00000000205, 5.57286878268, 2090.3096723752],
    [0.00000000194, 4.18008390132, 3377.217792004],
    [0.00000000172, 0.30934887625, 319.5732633943],
    [0.00000000203, 2.24205059922, 67.6680515665],
    [0.00000000205, 3.65560494081, 3583.4033404412],
    [0.00000000148, 0.95806862633, 6283.0758499914],
    [0.00000000149, 2.24034724389, 2964.8466951296],
    [0.00000000168, 3.47993311919, 3480.3105662226],
    [0.00000000139, 2.37956711582, 10213.285546211],
    [0.00000000147, 4.56583857062, 1262.3860848887],
    [0.00000000134, 1.49806132787, 74.7815985673],
    [0.00000000143, 1.62915670089, 902.7051860538],
    [0.00000000133, 1.08581010447, 519.3960243561],
    [0.00000000185, 5.29345109753, 3590.516887442],
    [0.00000000178, 4.90240193514, 3487.4241132234],
    [0.0000000014, 2.20203553186, 2545.3620512544],
    [0.00000000136, 3.98647175638, 916.9322800554],
    [0.0000000013, 6.14269242573, 945.2434557067],
    [0.00000000125, 0.97314956172, 526.5095713569],
    [0.00000000168, 4.09970466092, 3679.382567659],
    [0.00000000121, 0.85396123926, 305.3461693927],
    [0.00000000134, 4.16309161647, 2620.0006374698],
    [0.0000000012, 4.75335685006, 953.1077622329],
    [0.00000000159, 5.95088856265, 739.8086667949],
    [0.00000000143, 5.30216261872, 2406.7015420318],
    [0.00000000125, 5.76655116467, 1268.7488723641],
    [0.0000000012, 6.11533640393, 195.1398481733],
    [0.00000000124, 6.05342266975, 3700.7232086614],
    [0.00000000139, 5.80769025536, 1049.0869894507],
    [0.00000000144, 3.77644011752, 4002.8879843164],
    [0.00000000072, 3.39335722469, 453.424893819],
];

const L3: &[Term] = &[
    [0.00006500387, 2.5985888016, 7.1135470008],
    [0.00000470234, 2.47473054303, 14.2270940016],
    [0.00000023487, 2.45142067087, 206.1855484372],
    [0.00000017056, 2.30079467557, 21.3406410024],
    [0.00000017997, 1.59043798238, 103.0927742186],
    [0.00000013137, 2.75696419598, 95.9792272178],
    [0.0000001109, 2.55727685748, 199.0720014364],
    [0.00000008397, 1.28558620986, 412.3710968744],
    [0.00000008607, 2.2891956102, 110.2063212194],
    [0.00000007048, 5.20474565488, 639.897286314],
    [0.0000000872, 1.76353767065, 10.2949407385],
    [0.00000006624, 1.39386173833, 419.4846438752],
    [0.00000007482, 0.0, 0.0],
    [0.0000000511, 0.01401201768, 625.6701923124],
    [0.00000006023, 2.21645500729, 522.5774180938],
    [0.00000004538, 1.01353179299, 728.762966531],
    [0.00000004156, 3.4402128097, 309.2783226558],
    [0.00000003974, 4.30247336291, 88.865680217],
    [0.00000003777, 4.96068137249, 956.2891559706],
    [0.00000003638, 2.28054304135, 515.463871093],
    [0.00000002821, 6.06028409337, 942.062061969],
    [0.00000002721, 5.42795965841, 323.5054166574],
    [0.00000003413, 0.08339238131, 426.598190876],
    [0.0000000273, 0.74679324235, 1045.1548361876],
    [0.00000002946, 2.28399239217, 117.3198682202],
    [0.00000002369, 3.5506850859, 302.164775655],
    [0.00000002772, 1.23830544035, 735.8765135318],
    [0.00000002824, 1.99447600454, 838.9692877504],
    [0.00000002154, 1.31574827856, 213.299095438],
    [0.00000002041, 4.71548651725, 1272.6810256272],
    [0.00000002088, 2.00394614817, 831.8557407496],
    [0.00000001672, 0.48554136816, 1361.5467058442],
    [0.00000001504, 5.82794823709, 1258.4539316256],
    [0.00000001352, 1.4339673245, 220.4126424388],
    [0.00000001552, 1.70122270396, 1155.361157407],
    [0.00000001437, 6.07986504703, 742.9900605326],
    [0.00000001426, 1.0692388929, 1052.2683831884],
    [0.00000001337, 1.72037415759, 1148.2476104062],
    [0.00000001103, 4.47135575534, 1589.0728952838],
    [0.00000001018, 0.23174610846, 1677.9385755008],
    [0.00000000909, 2.7080393653, 191.9584544356],
    [0.00000000779, 5.61176824486, 1574.8458012822],
    [0.00000000913, 1.43315508712, 1471.7530270636],
    [0.00000000884, 1.44030898801, 1464.6394800628],
    [0.00000000633, 1.14969970862, 529.6909650946],
    [0.00000000791, 0.89013958913, 1368.660252845],
    [0.00000000594, 4.23597934486, 1905.4647649404],
    [0.00000000612, 6.26452241398, 1994.3304451574],
    [0.00000000598, 4.69238569689, 81.7521332162],
    [0.00000000676, 5.80017586211, 1059.3819301892],
    [0.00000000589, 1.41029418493, 405.2575498736],
    [0.00000000585, 1.161053101, 1781.0313497194],
    [0.0000000055, 1.16686847197, 1788.1448967202],
    [0.00000000459, 1.12354347479, 721.6494195302],
    [0.00000000393, 5.41748478391, 1891.2376709388],
    [0.00000000397, 1.48031747971, 124.433415221],
    [0.00000000386, 2.40710060862, 508.3503240922],
    [0.00000000452, 0.70345274225, 1685.0521225016],
    [0.00000000365, 6.01925891605, 2310.722314814],
    [0.00000000383, 0.88762836005, 2097.423219376],
    [0.0000000034, 0.85316784705, 1038.0412891868],
    [0.00000000317, 4.00853832879, 2221.856634597],
    [0.00000000376, 5.53608278762, 1375.7737998458],
    [0.00000000347, 3.97263961832, 536.8045120954],
    [0.00000000333, 0.90780311134, 2104.5367663768],
    [0.00000000257, 3.67843027086, 295.0512286542],
    [0.00000000263, 2.1179419409, 824.7421937488],
    [0.00000000262, 0.50638839483, 2001.4439921582],
    [0.00000000259, 6.24993645926, 1485.9801210652],
    [0.00000000243, 0.58301507175, 1354.4331588434],
    [0.00000000249, 0.61730431968, 2413.8150890326],
    [0.00000000214, 4.39352484132, 1162.4747044078],
    [0.00000000236, 5.98648085941, 1802.3719907218],
    [0.00000000193, 5.25020286877, 2207.6295405954],
    [0.00000000214, 5.77640884505, 2627.1141844706],
    [0.00000000238, 5.26443112939, 1692.1656695024],
    [0.0000000022, 2.89897511553, 750.1036075334],
    [0.00000000194, 1.83487780243, 1141.1340634054],
    [0.00000000203, 0.65303680302, 2420.9286360334],
    [0.00000000194, 2.62226010672, 1066.49547719],
    [0.00000000159, 1.4418484679, 1279.794572628],
    [0.00000000177, 4.2147330892, 1478.8665740644],
    [0.00000000154, 1.71602562135, 963.4027029714],
    [0.00000000193, 0.19801832235, 1169.5882514086],
    [0.00000000169, 3.79507380835, 2538.2485042536],
    [0.00000000182, 5.72767482012, 2118.7638603784],
    [0.00000000165, 0.32536873765, 1670.8250285],
    [0.00000000162, 3.24073745667, 853.196381752],
    [0.00000000138, 1.50220014912, 227.5261894396],
];

const L4: &[Term] = &[
    [0.00000669512, 0.85280446877, 7.1135470008],
    [0.0000009984, 0.74141513153, 14.2270940016],
    [0.00000004279, 0.48394526989, 21.3406410024],
    [0.0000000187, 4.26401863897, 199.0720014364],
    [0.00000001694, 4.25641384044, 206.1855484372],
    [0.0000000122, 4.72144163728, 95.9792272178],
    [0.00000001113, 3.00873330597, 412.3710968744],
    [0.00000000935, 6.05627280491, 88.865680217],
    [0.00000000725, 3.49009655178, 639.897286314],
    [0.00000000767, 3.51839527741, 103.0927742186],
    [0.00000000718, 0.55179587802, 110.2063212194],
    [0.0000000062, 3.99468407568, 515.463871093],
    [0.00000000531, 1.77117973464, 625.6701923124],
    [0.00000000615, 2.75106520186, 728.762966531],
    [0.00000000453, 5.22201258213, 309.2783226558],
    [0.00000000455, 4.06673906646, 522.5774180938],
    [0.00000000414, 5.22394329015, 302.164775655],
    [0.00000000498, 0.61681072094, 117.3198682202],
    [0.00000000384, 3.2630893905, 956.2891559706],
    [0.00000000363, 3.7313492891, 831.8557407496],
    [0.00000000374, 2.5011755846, 1045.1548361876],
    [0.00000000295, 1.54714352021, 942.062061969],
    [0.00000000286, 3.66183858348, 323.5054166574],
    [0.00000000282, 3.38725715668, 419.4846438752],
    [0.00000000235, 3.45405811464, 1148.2476104062],
    [0.00000000222, 3.86690760164, 838.9692877504],
    [0.00000000239, 4.64356881095, 426.598190876],
    [0.00000000208, 3.0409317963, 1272.6810256272],
    [0.00000000228, 2.25398823746, 1361.5467058442],
    [0.00000000185, 4.42123518501, 191.9584544356],
];

const L5: &[Term] = &[
    [0.00000049625, 5.25702966548, 7.1135470008],
    [0.000000158, 5.24948942826, 14.2270940016],
];

const K0: &[Term] = &[
    [0.04698572124, 0.0, 0.0],
    [0.0006528701, 5.14135675663, 103.0927742186],
    [0.00038006128, 2.03714771852, 7.1135470008],
    [0.00013518804, 2.94820975394, 110.2063212194],
    [0.00010740857, 4.85106997988, 419.4846438752],
    [0.00006494479, 6.11501213894, 206.1855484372],
    [0.00008220806, 3.97331004047, 213.299095438],
    [0.00003765858, 4.56504910618, 735.8765135318],
    [0.00002959813, 3.68441778896, 529.6909650946],
    [0.00002035004, 5.81350208632, 522.5774180938],
    [0.00001747828, 1.94483888566, 426.598190876],
    [0.00001558179, 4.27725789559, 1052.2683831884],
    [0.00001472174, 0.0738901965, 1162.4747044078],
    [0.00000927159, 5.52533351772, 838.9692877504],
    [0.00000789438, 0.7948955877, 309.2783226558],
    [0.00001038475, 1.75340907792, 6283.0758499914],
    [0.0000098294, 3.17672660957, 10213.285546211],
    [0.00000699754, 1.71513916057, 323.5054166574],
    [0.000007615, 5.2897633145, 95.9792272178],
    [0.0000071195, 1.90078392393, 14.2270940016],
    [0.0000083143, 6.10639534966, 1478.8665740644],
    [0.00000687623, 3.98852056742, 1368.660252845],
    [0.00000480034, 5.3182288872, 1155.361157407],
    [0.0000058541, 3.3369796937, 846.0828347512],
    [0.00000419807, 0.99873855032, 949.1756089698],
    [0.00000359908, 2.05590382649, 742.9900605326],
    [0.00000443487, 5.85398298929, 1795.258443721],
    [0.00000328511, 0.50863495149, 625.6701923124],
    [0.00000402497, 0.55465041009, 5223.6939198022],
    [0.00000325616, 4.20083915987, 316.3918696566],
    [0.00000311617, 0.65157412829, 1265.5674786264],
    [0.0000035999, 1.97760722983, 9153.9036160218],
    [0.00000253426, 5.07551011428, 1471.7530270636],
    [0.00000245483, 2.86993582502, 117.3198682202],
    [0.00000310096, 3.69828809647, 1685.0521225016],
    [0.00000281947, 2.20322414892, 380.12776796],
    [0.00000196029, 6.25024587587, 199.0720014364],
    [0.00000231155, 5.60946297135, 2111.6503133776],
    [0.00000182216, 0.26832475325, 942.062061969],
    [0.00000205301, 0.34802096467, 1581.959348283],
    [0.00000189658, 0.78276236293, 639.897286314],
    [0.00000198528, 5.01726471886, 412.3710968744],
    [0.00000189263, 2.82486645294, 632.7837393132],
    [0.00000135451, 4.8292981583, 1788.1448967202],
    [0.00000164709, 2.3521174544, 74.7815985673],
    [0.00000141504, 3.39989650459, 2001.4439921582],
    [0.00000127712, 0.06320301356, 1898.3512179396],
    [0.00000109521, 0.99658636159, 3.9321532631],
    [0.00000124482, 0.74828049115, 220.4126424388],
    [0.00000106733, 0.01780606367, 1258.4539316256],
    [0.00000119253, 5.37298394723, 2428.0421830342],
    [0.00000113144, 0.73812090955, 1692.1656695024],
    [0.0000007884, 5.96011656325, 515.463871093],
    [0.00000092157, 4.74236670587, 728.762966531],
    [0.0000008793, 1.40640576056, 1059.3819301892],
    [0.00000072549, 4.58039163728, 2104.5367663768],
    [0.00000080369, 0.52000113976, 2008.557539159],
    [0.00000089331, 4.40893244652, 26087.9031415742],
    [0.00000088874, 6.20296222791, 3340.6124266998],
    [0.00000076727, 6.07298529536, 2214.7430875962],
    [0.00000063998, 6.05083021755, 1574.8458012822],
    [0.00000071035, 4.4935788536, 149.5631971346],
    [0.00000075301, 6.1119827445, 305.3461693927],
    [0.00000062037, 0.38848820616, 536.8045120954],
    [0.00000064563, 3.09172129951, 2317.8358618148],
    [0.00000071822, 2.54320796157, 453.424893819],
    [0.00000061206, 5.14471689854, 2744.4340526908],
    [0.00000062065, 2.17273623595, 38.1330356378],
    [0.00000043761, 5.67645347258, 831.8557407496],
    [0.00000052698, 0.28673256166, 2324.9494088156],
    [0.00000040396, 1.95194074007, 1375.7737998458],
    [0.00000038749, 4.32968503666, 2420.9286360334],
    [0.00000045364, 4.46696970462, 1045.1548361876],
    [0.00000044924, 5.80723189933, 2531.1349572528],
    [0.00000038559, 5.79995788071, 1891.2376709388],
    [0.00000049212, 1.7745817167, 3.1813937377],
    [0.00000038266, 0.93195496537, 302.164775655],
    [0.00000043315, 3.60280181231, 835.0371344873],
    [0.00000032994, 4.09635408906, 76.2660712756],
    [0.00000032888, 0.04871294802, 2641.3412784722],
    [0.00000038637, 5.0054885398, 2281.2304965106],
    [0.00000031356, 0.21049868086, 4694.0029547076],
    [0.00000031331, 4.9247548175, 3060.8259223474],
    [0.00000026018, 5.42586595555, 1148.2476104062],
    [0.00000026382, 6.03668267404, 853.196381752],
    [0.00000029259, 2.76888257013, 2634.2277314714],
    [0.00000027405, 1.62855384068, 8624.2126509272],
    [0.00000030102, 3.11816787678, 1169.5882514086],
    [0.00000030723, 3.20487503482, 25028.521211385],
    [0.00000023155, 5.54807190454, 2207.6295405954],
    [0.00000025821, 5.54793608943, 2847.5268269094],
    [0.00000020583, 4.07795195695, 2737.32050569],
    [0.00000025425, 2.85753849819, 1485.9801210652],
    [0.00000022019, 2.43838007196, 99.1606209555],
    [0.00000019154, 5.33147822717, 11.0457002639],
    [0.00000019803, 3.82254422124, 5753.3848848968],
    [0.00000021981, 4.19241857052, 1361.5467058442],
    [0.00000018173, 5.24600120087, 9683.5945811164],
    [0.00000019861, 6.09163575231, 2957.7331481288],
    [0.00000019085, 0.64199269717, 618.5566453116],
    [0.00000023598, 3.39880430239, 1439.5096981492],
    [0.0000001836, 1.57818643085, 330.6189636582],
    [0.00000015505, 5.1672804209, 1464.6394800628],
    [0.00000018145, 1.17575113979, 52175.8062831484],
    [0.00000017349, 1.7103210134, 12566.1516999828],
    [0.00000016024, 4.71340862119, 3377.217792004],
    [0.00000019535, 5.16468288426, 1.4844727083],
    [0.00000017818, 3.74849469152, 1272.6810256272],
    [0.00000017828, 2.61299746631, 1802.3719907218],
    [0.00000013783, 1.25590606577, 433.7117378768],
    [0.00000013807, 5.29539671325, 2524.021410252],
    [0.00000014626, 5.29444785773, 3163.918696566],
    [0.0000001535, 3.47732804513, 1589.0728952838],
    [0.00000014959, 3.74405859131, 230.5645708254],
    [0.00000013112, 2.42374369648, 2950.619601128],
    [0.00000013891, 3.23787067787, 1905.4647649404],
    [0.00000010853, 3.82578046037, 3053.7123753466],
    [0.00000011866, 0.37354341148, 934.9485149682],
    [0.00000014308, 1.23299174027, 760.25553592],
    [0.00000011711, 5.85083067475, 3274.1250177854],
    [0.00000009165, 4.91036081173, 1781.0313497194],
    [0.00000011595, 1.74971837376, 21.3406410024],
    [0.00000009188, 2.35396613748, 2221.856634597],
    [0.00000010114, 3.92000578669, 1677.9385755008],
    [0.00000009999, 1.28594164921, 39.3568759152],
    [0.00000011442, 2.37583599246, 2118.7638603784],
    [0.00000009234, 5.2654606796, 107.0249274817],
    [0.0000001106, 2.7969156397, 35.4247226521],
    [0.00000008279, 0.25814015621, 6681.2248533996],
    [0.00000009662, 3.84182142382, 92.0470739547],
    [0.000000082, 4.51078275378, 3693.6096616606],
    [0.00000008163, 5.04235564048, 2840.4132799086],
    [0.00000009475, 1.47803547752, 454.9093665273],
    [0.00000007133, 1.97183053833, 2538.2485042536],
    [0.00000008229, 0.52832175514, 224.3447957019],
    [0.00000008186, 5.04655118563, 3480.3105662226],
    [0.00000007701, 0.10618570304, 1251.3403846248],
    [0.00000006656, 4.05670156232, 20426.571092422],
    [0.0000000768, 5.24327129635, 6812.766815086],
    [0.00000009182, 5.01539113463, 1289.9465010146],
    [0.00000007529, 0.38545640696, 10742.9765113056],
    [0.00000007138, 0.62673946661, 227.5261894396],
    [0.00000006781, 5.61077117314, 3590.516887442],
    [0.00000005672, 3.57372569581, 3370.1042450032],
    [0.00000005657, 3.50059583006, 2.4476805548],
    [0.00000005493, 0.01887328917, 217.2312487011],
    [0.00000005344, 4.65492805986, 2097.423219376],
    [0.00000006259, 0.5149040711, 11506.7697697936],
    [0.00000005802, 2.04402484664, 3267.0114707846],
    [0.00000007389, 4.11211945597, 944.9828232758],
    [0.00000006129, 6.25563740993, 51116.4243529592],
    [0.0000000523, 1.64057486327, 2854.6403739102],
    [0.00000006964, 2.17344400134, 2435.155730035],
    [0.00000006958, 3.73980725235, 1512.8068240082],
    [0.00000006, 1.67040390325, 142.4496501338],
    [0.00000005119, 1.4874970968, 10.2949407385],
    [0.00000005689, 2.07620235231, 106.2741679563],
    [0.0000000504, 6.1257515691, 1567.7322542814],
    [0.00000004983, 3.3284256354, 18.1592472647],
    [0.00000004316, 0.32180261362, 70.8494453042],
    [0.00000004782, 4.78930573759, 3156.8051495652],
    [0.00000004161, 5.64639018436, 99.9113804809],
    [0.00000005754, 4.80093169849, 1894.4190646765],
    [0.00000004203, 4.31687265699, 4010.0015313172],
    [0.0000000415, 4.22612291597, 78263.70942472259],
    [0.00000004535, 4.80424247514, 3796.7024358792],
    [0.00000005177, 3.37905089488, 114.1384744825],
    [0.0000000499, 1.28031623102, 173.9422195228],
    [0.00000003904, 5.13646864172, 750.1036075334],
    [0.00000003661, 1.33806025528, 3171.0322435668],
    [0.00000003623, 0.13228254591, 191.9584544356],
    [0.00000003869, 5.37226906695, 3906.9087570986],
    [0.0000000426, 3.642361958, 1994.3304451574],
    [0.00000004386, 1.93296379685, 2751.5475996916],
    [0.00000003224, 0.46432990567, 647.0108333148],
    [0.00000004244, 3.2869655674, 378.6432952517],
    [0.00000004236, 4.26026162668, 381.6122406683],
    [0.00000004283, 1.10331102844, 1364.7280995819],
    [0.00000003065, 4.40089341336, 2413.8150890326],
    [0.00000004171, 6.10124129771, 604.4725636619],
    [0.00000003208, 5.33414667328, 5621.8429232104],
    [0.00000002934, 3.32217222384, 3686.4961146598],
    [0.00000003634, 4.54476501701, 1751.539531416],
    [0.0000000328, 5.86426659875, 1884.124123938],
    [0.00000003502, 1.84443995843, 88.865680217],
    [0.00000002707, 2.70417409899, 124.433415221],
    [0.00000003659, 2.63489182678, 1215.1649024473],
    [0.00000003486, 1.89167854381, 415.5524906121],
    [0.00000002552, 1.61109402873, 3583.4033404412],
    [0.00000002468, 1.05153483805, 3487.4241132234],
    [0.00000002452, 4.34444547348, 121.2520214833],
    [0.00000002775, 4.53669307677, 3473.1970192218],
    [0.00000002394, 5.25634248876, 5.6290742925],
    [0.00000002325, 2.86054218963, 19367.1891622328],
    [0.00000003072, 5.14182251285, 685.4739373527],
    [0.00000002241, 0.07226778465, 210.1177017003],
    [0.00000002324, 3.73719834345, 32.2433289144],
    [0.00000002857, 1.37656018953, 155.7829722581],
    [0.00000002491, 4.56762244247, 4113.0943055358],
    [0.00000002659, 1.73507899232, 3067.9394693482],
    [0.00000002161, 4.13128623662, 4326.3934009738],
    [0.00000002721, 3.72900266696, 1699.2792165032],
    [0.00000002161, 6.15971624427, 4164.311989613],
    [0.00000002129, 0.82139690006, 24.3790223882],
    [0.00000002121, 1.32489961262, 67.6680515665],
    [0.00000002506, 4.53922690735, 1066.49547719],
    [0.00000002181, 5.13599319503, 4223.3006267552],
    [0.00000002494, 4.83934688106, 423.4167971383],
    [0.0000000228, 2.85653656694, 24498.8302462904],
    [0.00000002717, 5.16274932082, 984.6003316219],
    [0.00000002636, 3.53021724512, 2015.6710861598],
    [0.00000002272, 0.42630922519, 5230.807466803],
    [0.00000002027, 0.87297448943, 28.3111756513],
    [0.00000002112, 5.60401074489, 2200.5159935946],
    [0.00000002059, 5.64388963655, 4.665866446],
    [0.00000001836, 4.77106702727, 195.1398481733],
    [0.00000002261, 3.81312394235, 5216.5803728014],
    [0.00000001807, 6.12479045855, 508.3503240922],
    [0.00000001849, 1.28040112707, 8094.5216858326],
    [0.00000002254, 2.57089671992, 63.7358983034],
    [0.00000001887, 0.27819401506, 543.9180590962],
    [0.00000001727, 4.14903151259, 2730.2069586892],
    [0.00000002086, 1.40187234144, 909.8187330546],
    [0.00000001733, 1.96634700406, 2810.9214616052],
    [0.00000002034, 1.84926845321, 9161.0171630226],
    [0.00000002167, 3.49090164231, 408.4389436113],
    [0.00000002021, 5.23608988835, 9146.790069021],
    [0.00000002208, 3.30895756022, 2332.0629558164],
    [0.00000001614, 0.77519248609, 3803.81598288],
    [0.00000001918, 3.80138678871, 1969.2006632438],
    [0.00000002208, 5.4940110553, 956.2891559706],
    [0.00000002142, 0.13937787531, 1744.8558675419],
    [0.00000001749, 6.27761001691, 5.4166259714],
    [0.00000001528, 5.82324434998, 533.6231183577],
    [0.00000001595, 0.19289304312, 25558.2121764796],
    [0.00000001962, 3.06365431088, 430.5303441391],
    [0.000000015, 3.07156141736, 4002.8879843164],
    [0.00000001482, 4.31202118576, 0.9632078465],
    [0.00000001479, 5.71632226128, 415.2918581812],
    [0.00000001811, 2.54355468936, 33.9402499438],
    [0.00000001492, 1.97349282583, 312.4597163935],
    [0.00000001607, 1.54796952717, 3384.3313390048],
    [0.00000001596, 4.28490895331, 3789.5888888784],
    [0.00000001501, 5.17177066041, 10977.078804699],
    [0.00000001394, 3.02319167606, 77204.32749453338],
    [0.00000001433, 2.94693209325, 202.2533951741],
    [0.00000001699, 0.91637904397, 303.8616966844],
    [0.00000001677, 3.0815379225, 2648.454825473],
    [0.00000001355, 0.7278029398, 320.3240229197],
    [0.00000001611, 1.52570565752, 731.9443602687],
    [0.00000001499, 3.35067489733, 2310.722314814],
    [0.00000001358, 4.33692394106, 4429.4861751924],
    [0.00000001376, 1.43205194625, 69.1525242748],
    [0.00000001199, 1.27047402667, 422.6660376129],
    [0.00000001196, 2.53721965967, 245.5424243524],
    [0.00000001175, 5.84571487249, 824.7421937488],
    [0.00000001341, 5.34561279121, 2516.9078632512],
    [0.00000001217, 4.90266341299, 4539.6924964118],
    [0.00000001145, 1.10366085133, 3899.7952100978],
    [0.00000001243, 1.38024144173, 9.5612275556],
    [0.00000001241, 5.7208089175, 387.2413149608],
    [0.00000001444, 1.33604307527, 458.8415197904],
    [0.00000001116, 3.95350795252, 4642.7852706304],
    [0.00000001083, 5.36268816931, 416.3032501375],
    [0.00000001201, 2.49117129596, 113.3877149571],
    [0.00000001138, 5.67772813339, 166.828672522],
    [0.00000001221, 2.4648122839, 46.470422916],
    [0.0000000103, 0.50594861949, 4120.2078525366],
    [0.00000001393, 6.22684565836, 2349.3284312038],
    [0.00000001352, 2.51654094034, 1819.6374661092],
    [0.00000001, 0.99345794803, 104351.61256629678],
    [0.00000001001, 1.15807735945, 31.019488637],
    [0.00000001121, 2.62055170953, 746.9222137957],
    [0.00000001319, 0.06717869172, 280.9671470045],
    [0.00000000954, 3.89928973364, 3046.5988283458],
    [0.00000001199, 2.85524564984, 2964.8466951296],
    [0.00000001172, 2.27163168427, 8.0767548473],
    [0.00000001221, 0.2651590809, 73.297125859],
    [0.00000001162, 1.07736689065, 295.0512286542],
    [0.00000001262, 3.00076677963, 72.0732855816],
    [0.0000000116, 4.50466687255, 739.8086667949],
    [0.00000000883, 5.88738548557, 526.5095713569],
    [0.00000000971, 1.36892972189, 3700.7232086614],
    [0.00000000868, 0.59641722335, 10021.8372800994],
    [0.00000000949, 6.02699323239, 100.6450936638],
    [0.00000001054, 3.40725195345, 151.0476698429],
    [0.00000000828, 0.82359232657, 983.1158589136],
    [0.00000001143, 5.31638778744, 2004.364753465],
    [0.00000000884, 0.31169916423, 203.0041546995],
    [0.00000000785, 5.589403824, 1141.1340634054],
    [0.00000000848, 2.68125950092, 518.6452648307],
    [0.00000000909, 4.03407897778, 4105.980758535],
    [0.00000000757, 2.8222408584, 4319.279853973],
    [0.00000000939, 2.93230887741, 6.2197751235],
    [0.00000001006, 4.96295592946, 306.830642101],
    [0.00000000927, 0.94182530107, 355.7487455718],
    [0.0000000091, 2.45867620575, 209.3669421749],
    [0.00000000995, 4.03956534307, 1670.0742689746],
    [0.0000000072, 5.1105410783, 327.4375699205],
    [0.00000000969, 5.65331769703, 836.5216071956],
    [0.0000000084, 5.08815101631, 2833.2997329078],
    [0.00000000959, 4.69736458681, 833.552661779],
    [0.0000000098, 3.1583476375, 724.8308132679],
    [0.00000000977, 5.68683773271, 1436.5407527326],
    [0.0000000092, 0.25882181938, 1140.38330388],
    [0.00000000703, 4.68047572498, 1382.8873468466],
    [0.00000000834, 2.336634348, 373.0142209592],
    [0.00000000687, 4.44433171952, 511.5317178299],
    [0.00000000735, 4.11249003567, 4745.878044849],
    [0.00000000827, 2.61080728275, 3281.2385647862],
    [0.00000000673, 4.6722885831, 4856.0843660684],
    [0.00000000644, 0.24180527752, 4436.5997221932],
    [0.00000000829, 2.99111900787, 299.1263942692],
    [0.00000000766, 1.15461012069, 1048.3362299253],
    [0.0000000065, 5.41020304115, 850.0149880143],
    [0.00000000704, 1.62667795049, 26617.5941066688],
    [0.0000000074, 1.51281373429, 105.5404547734],
    [0.00000000579, 3.78274323009, 4959.177140287],
    [0.00000000645, 2.29923525565, 1063.3140834523],
    [0.00000000615, 3.98047517887, 827.9235874865],
    [0.00000000759, 0.48633525828, 451.9404211107],
    [0.00000000589, 1.19366592772, 4017.115078318],
    [0.0000000067, 0.7852531956, 611.4430983108],
    [0.00000000651, 5.21641278701, 2424.1100297711],
    [0.00000000614, 4.87015301159, 102.1295663721],
    [0.00000000552, 0.52096524021, 4216.1870797544],
    [0.00000000571, 2.32460756503, 81.7521332162],
    [0.00000000623, 3.44065921834, 3870.3033917944],
    [0.00000000544, 2.17527704151, 148.0787244263],
    [0.00000000524, 5.06630928918, 732.6951197941],
    [0.0000000053, 1.97913402833, 103.0445901088],
    [0.00000000596, 0.9153507098, 5092.1519581158],
    [0.0000000053, 5.16840700278, 103.1409583284],
    [0.00000000516, 3.65330287274, 3362.9906980024],
    [0.00000000649, 5.29516301822, 81.0013736908],
    [0.00000000513, 5.33403407569, 1457.525933062],
    [0.00000000571, 0.55375549605, 636.7158925763],
    [0.00000000589, 2.30878085481, 104.0559820651],
    [0.00000000523, 5.69914810482, 1166.4068576709],
    [0.00000000634, 1.07189192181, 775.233389447],
    [0.00000000498, 1.49191478047, 248.7238180901],
    [0.00000000484, 0.85513777372, 739.0579072695],
    [0.00000000485, 5.55259406861, 842.9014410135],
    [0.0000000061, 2.04946786485, 78.7137518304],
    [0.00000000471, 5.7343518605, 860.3099287528],
    [0.00000000549, 2.38031859915, 3597.6304344428],
    [0.00000000615, 2.61576047062, 232.0490435337],
    [0.0000000056, 6.20837441572, 405.2575498736],
    [0.00000000452, 2.26191858701, 561.934294009],
    [0.00000000541, 5.94129677996, 298.2326223919],
    [0.0000000044, 1.51914127953, 525.7588118315],
    [0.00000000599, 4.18303080517, 1056.2005364515],
    [0.00000000519, 4.83105319882, 3149.6916025644],
    [0.00000000464, 6.13061280276, 440.8252848776],
    [0.00000000513, 3.78428014616, 4422.3726281916],
    [0.00000000449, 5.90162343782, 50586.73338786459],
    [0.00000000543, 2.77163663345, 610.6923387854],
    [0.00000000491, 4.10146365017, 2042.4977891028],
    [0.00000000455, 1.75929125033, 18837.49819713819],
    [0.00000000421, 0.04473057132, 241.6102710893],
    [0.0000000041, 2.04357215335, 93.531546663],
    [0.00000000396, 6.26512644002, 4752.9915918498],
    [0.0000000053, 1.54724796892, 2199.7652340692],
    [0.00000000376, 2.5749239624, 4635.6717236296],
    [0.00000000465, 0.50893562232, 927.8349679674],
    [0.00000000404, 4.32270256427, 491.5579294568],
    [0.00000000396, 3.89487196982, 5062.2699145056],
    [0.00000000494, 2.82252075913, 1041.2226829245],
    [0.0000000037, 4.44578899239, 5172.476235725],
    [0.00000000496, 6.07004033674, 597.3590166611],
    [0.00000000423, 2.81329091499, 1514.2912967165],
    [0.00000000451, 4.8289281101, 229.0800981171],
    [0.00000000364, 1.01940139071, 384.0599212231],
    [0.0000000038, 1.36822334016, 277.0349937414],
    [0.00000000434, 0.9333738299, 313.2104759189],
    [0.00000000359, 1.01826578875, 4333.5069479746],
    [0.00000000457, 2.06897296306, 679.2541622292],
    [0.00000000383, 1.99852543712, 1379.7059531089],
    [0.00000000401, 0.73718187219, 842.1506814881],
    [0.00000000423, 5.60950532633, 483.2205421786],
    [0.00000000441, 1.70562008755, 114.3991069134],
    [0.00000000376, 4.1272640159, 1221.8485663214],
    [0.00000000335, 6.0739404925, 103292.23063610759],
    [0.00000000361, 6.27689863081, 519.3960243561],
    [0.00000000468, 5.31252102041, 1021.2488945514],
    [0.00000000429, 2.31786320383, 758.7710632117],
    [0.00000000326, 5.08320909673, 1773.9178027186],
    [0.00000000428, 3.91548022188, 2274.5468326365],
    [0.00000000327, 2.85859982162, 1158.5425511447],
    [0.00000000404, 0.48549912958, 953.1077622329],
    [0.0000000039, 0.94940430428, 490.3340891794],
    [0.00000000356, 4.51746883503, 10447.3878396044],
    [0.00000000326, 1.66718656331, 18849.2275499742],
    [0.00000000355, 2.15333000339, 3914.0223040994],
    [0.00000000334, 3.67152699612, 97.6761482472],
    [0.00000000303, 3.61730816237, 5275.5690099436],
    [0.00000000301, 5.74895704684, 8962.4553499102],
    [0.00000000358, 6.13917607398, 77.7505439839],
    [0.00000000318, 5.73181990424, 1159.2933106701],
    [0.00000000326, 5.55332578414, 1482.7987273275],
    [0.00000000359, 5.939387627, 721.6494195302],
    [0.00000000309, 5.98178530244, 108.7218485111],
    [0.00000000321, 3.24398516236, 51646.11531805379],
    [0.00000000276, 4.76955420116, 1049.0869894507],
    [0.00000000273, 3.41239860185, 3679.382567659],
    [0.00000000276, 1.00615551128, 4701.1165017084],
    [0.00000000357, 4.47952502506, 1438.0252254409],
    [0.00000000274, 1.61180389784, 960.2213092337],
    [0.00000000355, 1.63240677984, 247.2393453818],
    [0.00000000332, 0.24070538194, 1244.226837624],
    [0.00000000317, 4.57554042988, 3466.083472221],
    [0.00000000353, 5.45594145438, 1440.9941708575],
    [0.00000000291, 5.8351848443, 3259.8979237838],
    [0.00000000292, 0.51000641054, 269.9214467406],
    [0.00000000297, 4.82009449967, 31.492569389],
    [0.00000000348, 6.13834127998, 244.318584075],
    [0.00000000301, 6.20402516593, 4532.578949411],
    [0.00000000259, 1.40849818991, 56.6223513026],
    [0.00000000277, 5.54952826576, 3576.2897934404],
    [0.00000000267, 2.68145378018, 1474.9344208013],
    [0.00000000258, 5.49105783437, 2228.9701815978],
    [0.00000000248, 4.04405332526, 130439.51570787099],
    [0.00000000313, 0.808282675, 1091.6252591036],
    [0.00000000325, 0.06018332849, 1912.5783119412],
    [0.00000000247, 5.02577699658, 2545.3620512544],
    [0.00000000249, 0.09036278366, 107.7586406646],
    [0.00000000242, 0.52581330132, 1055.4497769261],
    [0.00000000329, 1.36148524928, 2804.2377977311],
    [0.00000000317, 4.23354088295, 39.6175083461],
    [0.00000000239, 6.00904853451, 5069.3834615064],
    [0.00000000293, 0.40390938209, 1596.1864422846],
    [0.00000000319, 1.4268049068, 337.732510659],
    [0.00000000287, 3.53626633475, 4738.7644978482],
    [0.00000000241, 2.42683824583, 8631.326197928],
    [0.00000000296, 0.6641596765, 672.1406152284],
    [0.00000000307, 3.23424770544, 36.6485629295],
    [0.00000000235, 2.02282887236, 878.3261636656],
    [0.00000000249, 0.50395463052, 145.6310438715],
    [0.00000000246, 3.84357252213, 103.6140390804],
    [0.00000000241, 1.60879883587, 1696.0978227655],
    [0.00000000243, 3.47494962204, 4686.8894077068],
    [0.00000000305, 1.14924168352, 4590.910180489],
    [0.00000000313, 3.8585201649, 1372.5924061081],
    [0.00000000223, 4.64878742072, 2861.753920911],
    [0.0000000029, 1.40391938517, 319.5732633943],
    [0.00000000245, 3.3467574986, 102.5715093568],
    [0.00000000273, 2.40568415484, 5326.7866940208],
    [0.00000000295, 2.95601716881, 2627.1141844706],
    [0.00000000236, 5.34356399988, 284.1485407422],
    [0.0000000024, 0.48376086967, 1354.4331588434],
    [0.00000000289, 1.66126180162, 1595.2926704073],
    [0.00000000233, 2.32493224666, 170.7608257851],
    [0.00000000219, 0.84010538652, 4649.8988176312],
    [0.00000000222, 0.07314867575, 1038.0412891868],
    [0.00000000216, 2.03104695586, 5746.271337896],
    [0.00000000277, 0.60698362775, 237.6781178262],
    [0.00000000213, 5.64324966794, 134.5853436076],
    [0.00000000219, 0.4575954808, 234.6397364404],
    [0.00000000273, 4.18390045351, 50.4025761791],
    [0.00000000281, 2.5694867032, 8521.1198767086],
    [0.00000000212, 3.83829461148, 1144.3154571431],
    [0.00000000215, 3.4322732741, 348.635198571],
    [0.00000000212, 3.68474505388, 5378.6617841622],
    [0.00000000206, 0.66747223662, 144.1465711632],
    [0.00000000249, 0.62320164244, 1681.1199692385],
    [0.00000000222, 0.02961838885, 252.6559713532],
    [0.00000000266, 0.49020502395, 1670.8250285],
    [0.00000000256, 2.48679470345, 1357.6145525811],
    [0.00000000277, 5.44539779541, 2124.9836355019],
    [0.00000000226, 1.93006862634, 4230.414173756],
    [0.00000000204, 0.94381685221, 906.849787638],
    [0.00000000225, 5.8971597753, 938.1299087059],
    [0.00000000268, 6.09920899345, 1288.4620283063],
    [0.00000000273, 0.2818474766, 1269.4996318895],
    [0.00000000202, 4.22279729378, 5488.8681053816],
    [0.0000000022, 5.27927463027, 3892.681663097],
    [0.00000000212, 4.89303132644, 8617.0991039264],
    [0.00000000198, 3.45397860505, 9676.4810341156],
    [0.000000002, 1.31321457317, 1276.6131788903],
    [0.000000002, 4.84118015485, 2090.3096723752],
    [0.00000000217, 3.9170814956, 59.8037450403],
    [0.00000000256, 0.34417076021, 1987.2168981566],
    [0.00000000235, 3.80883541278, 9256.9963902404],
    [0.00000000236, 3.13050885395, 885.4397106664],
    [0.00000000204, 5.98433238951, 835.7878940127],
    [0.00000000244, 4.38541199784, 12036.4607348882],
    [0.00000000191, 0.28750201399, 27147.28507176339],
    [0.00000000235, 6.25866157676, 1560.6187072806],
    [0.00000000228, 1.87940328636, 5120.6011455836],
    [0.00000000187, 4.32741783464, 3178.1457905676],
    [0.00000000188, 4.26458735809, 391.1734682239],
    [0.00000000183, 2.32880052162, 4952.0635932862],
    [0.00000000192, 0.11144318941, 11272.6674764002],
    [0.00000000203, 5.57911372229, 1475.6851803267],
    [0.00000000241, 2.34545152861, 6151.533888305],
    [0.00000000179, 5.24297216794, 757.2171545342],
    [0.00000000221, 0.14093535289, 2303.6087678132],
    [0.00000000226, 5.39364658348, 799.6124118352],
    [0.00000000232, 0.78856592425, 1291.4309737229],
    [0.00000000222, 4.01993183083, 369.0820676961],
    [0.00000000241, 3.13808836137, 5856.4776591154],
    [0.00000000191, 6.2043158988, 621.7380390493],
    [0.00000000211, 2.67412823378, 446.3113468182],
    [0.00000000193, 3.45557221208, 437.6438911399],
    [0.00000000173, 0.73765169029, 700.4517908797],
    [0.00000000236, 5.78340910742, 913.7508863177],
    [0.00000000185, 2.45882889623, 1791.3262904579],
    [0.00000000195, 5.36556929431, 1799.1905969841],
    [0.00000000204, 0.34505528033, 2879.0193962984],
    [0.00000000166, 3.69590493251, 153.4953503977],
    [0.00000000202, 3.3024562534, 9050.8108418032],
    [0.00000000205, 0.66750091285, 629.6023455755],
    [0.00000000204, 3.52780898925, 1432.3961511484],
    [0.00000000202, 5.67877049432, 1809.4855377226],
    [0.00000000163, 2.97570322153, 106.0135355254],
    [0.00000000173, 6.22559780794, 2943.5060541272],
    [0.00000000206, 4.60719091316, 377.1588225434],
    [0.000000002, 1.99152320199, 2274.1169495098],
    [0.000000002, 5.5564932134, 460.5384408198],
    [0.000000002, 0.14330252442, 1446.62324515],
    [0.00000000164, 2.1785552678, 172.2452984934],
    [0.00000000198, 4.87787102493, 2288.3440435114],
    [0.00000000185, 1.30599695818, 306.0969289181],
    [0.00000000182, 4.37338793894, 1173.5204046717],
    [0.00000000191, 4.32083526527, 3782.4753418776],
    [0.00000000159, 3.45593940261, 5591.9608796002],
    [0.00000000192, 2.91777934703, 334.5511169213],
    [0.00000000212, 5.49064402177, 417.0369633204],
    [0.00000000194, 1.73666905193, 222.8603229936],
    [0.00000000164, 5.7556133403, 109.2431133729],
    [0.00000000214, 5.99128750696, 16730.4636895958],
    [0.00000000152, 4.7216150385, 643.8294395771],
    [0.00000000208, 0.22112083166, 558.0021407459],
    [0.00000000152, 3.2126457509, 111.1695290659],
    [0.00000000167, 0.13839877625, 282.4516197128],
    [0.00000000162, 5.44596701851, 614.6244920485],
    [0.00000000154, 2.02076070096, 292.0128472684],
    [0.00000000209, 4.56069506662, 9786.687355335],
    [0.00000000187, 2.84119551598, 1201.831580323],
    [0.00000000195, 1.20327600219, 421.93232443],
    [0.00000000149, 5.53055073403, 162.8965192589],
    [0.00000000148, 4.02784896282, 3494.5376602242],
    [0.00000000177, 6.19862719262, 2620.0006374698],
    [0.00000000145, 5.84304235339, 3634.6210245184],
    [0.00000000168, 5.58149468903, 1254.5217783625],
    [0.00000000191, 0.24927947393, 157.2674449664],
    [0.00000000151, 2.5095486196, 23969.1392811958],
    [0.00000000146, 4.48128373328, 1365.4788591073],
    [0.0000000016, 5.01528740167, 4209.0735327536],
    [0.00000000189, 0.8731953844, 344.7030453079],
    [0.00000000188, 5.79250241183, 225.8292684102],
    [0.00000000149, 1.26950415897, 2012.4896924221],
    [0.00000000181, 5.4441331879, 2125.8774073792],
    [0.00000000151, 2.28813044981, 215.7467759928],
    [0.00000000183, 4.16966117142, 1065.6017053127],
    [0.00000000154, 2.58480081411, 98.8999885246],
    [0.00000000143, 5.75555298656, 5385.775331163],
    [0.00000000151, 1.79747412295, 64.9597385808],
    [0.00000000142, 2.40755428684, 208.633228992],
    [0.00000000154, 4.0007401984, 1489.9122743283],
    [0.0000000014, 3.18187596509, 3995.7744373156],
    [0.00000000192, 2.53351800313, 351.8165923087],
    [0.00000000149, 4.49113837857, 100.1720129118],
    [0.0000000014, 2.95907722659, 4804.209275927],
    [0.00000000181, 5.66127445396, 4848.9708190676],
    [0.00000000151, 0.58504574563, 17789.845619785],
    [0.00000000139, 4.88972434862, 419.532827985],
    [0.00000000139, 1.69094934109, 419.4364597654],
    [0.00000000157, 4.57292486193, 418.5214360287],
    [0.00000000134, 0.65623318584, 4966.2906872878],
    [0.00000000164, 5.95238905898, 1493.093668066],
    [0.00000000144, 0.30813912805, 586.3133163972],
    [0.00000000179, 0.94620621706, 385.5443939314],
    [0.00000000186, 0.60715428624, 2495.9226829218],
    [0.00000000133, 0.20979548119, 1371.8416465827],
    [0.00000000133, 1.78038335989, 1194.7180333222],
    [0.00000000132, 3.40332019153, 181.806526049],
    [0.00000000152, 1.89967432349, 131.4039498699],
    [0.00000000152, 2.0117352359, 420.4478517217],
    [0.00000000151, 6.02225908543, 110.2545053292],
    [0.00000000165, 5.99350793043, 1877.0105769372],
    [0.00000000182, 0.04163773982, 1585.8915015461],
    [0.00000000143, 0.88924534613, 1279.794572628],
    [0.00000000144, 0.41322423524, 88.1149206916],
    [0.00000000161, 0.54753630519, 1408.0171287602],
    [0.00000000158, 0.19090513617, 25021.4076643842],
    [0.00000000141, 1.71062386336, 4546.8060434126],
    [0.00000000134, 5.20192895013, 13095.8426650774],
    [0.00000000158, 3.07725245512, 25035.6347583858],
    [0.00000000136, 0.05324250952, 177.8743727859],
    [0.00000000159, 3.29003707336, 5055.1563675048],
    [0.00000000132, 0.37279123772, 203.7378678824],
    [0.00000000174, 0.52466925595, 7903.073419721],
    [0.00000000127, 0.26870043971, 567.8240007324],
    [0.00000000124, 5.8359165391, 205.2223405907],
    [0.00000000125, 0.0481824877, 77.962992305],
    [0.00000000146, 0.96375376191, 628.8515860501],
    [0.00000000151, 2.83082931262, 110.1581371096],
    [0.00000000124, 1.29081272374, 5643.1785636774],
    [0.00000000143, 2.83717458796, 383.0967133766],
    [0.00000000121, 0.93343319117, 7564.830720738],
    [0.00000000125, 3.55488174263, 1460.7073267997],
    [0.00000000123, 4.38225298098, 8734.4189721466],
    [0.00000000155, 3.49617784989, 1688.9842757647],
    [0.00000000122, 1.01207017427, 1593.0050485469],
    [0.00000000122, 5.53621064894, 7342.4577801806],
    [0.00000000131, 1.96488217838, 398.1440028728],
    [0.00000000144, 0.34710984307, 1997.5118388951],
    [0.00000000154, 4.9175275319, 90.5626012464],
    [0.00000000128, 5.44669432215, 703.6331846174],
    [0.00000000125, 4.18606132221, 2498.8916283384],
    [0.00000000161, 2.31667045115, 5650.2921106782],
    [0.00000000154, 0.60814857698, 945.9942152321],
    [0.00000000118, 4.60549701349, 2406.7015420318],
    [0.00000000125, 5.73638950843, 1152.1797636693],
    [0.00000000158, 4.5913736255, 112.6540017742],
    [0.00000000115, 3.39688936525, 5760.4984318976],
    [0.00000000135, 5.96067748449, 2936.3925071264],
    [0.00000000114, 1.47498747824, 4562.4609930212],
    [0.00000000114, 2.6956418904, 1165.6560981455],
    [0.00000000122, 3.38462784549, 1261.6353253633],
    [0.00000000153, 0.77623954807, 806.725958836],
    [0.00000000114, 2.71382602448, 9573.388259897],
    [0.00000000112, 5.15274467, 465.9550667912],
    [0.00000000142, 2.4864862121, 416.7763308895],
    [0.00000000113, 3.48287922798, 5695.0536538188],
    [0.00000000134, 2.14328369596, 1674.0064222377],
    [0.00000000111, 3.7413206244, 3810.9295298808],
    [0.00000000122, 6.05673337583, 569.0478410098],
    [0.00000000111, 1.75794935995, 102.3420146932],
    [0.00000000152, 3.98674062846, 4907.3020501456],
    [0.00000000109, 4.00539407015, 5805.2599750382],
    [0.00000000108, 5.49027787762, 103.843533744],
    [0.00000000143, 5.24492999491, 2442.2692770358],
    [0.00000000144, 0.55949091736, 1895.9035373848],
    [0.00000000118, 2.22096411146, 2107.7181601145],
    [0.00000000146, 3.73923667634, 9580.5018068978],
    [0.00000000105, 4.81983342471, 9690.7081281172],
    [0.00000000124, 5.38269127798, 1792.0770499833],
    [0.00000000144, 4.67416072891, 52705.49724824299],
    [0.00000000129, 2.58143900462, 1518.2234499796],
    [0.00000000145, 3.18520644271, 179.3588454942],
    [0.00000000135, 3.71983553759, 1213.680429739],
    [0.00000000111, 3.68258042536, 1806.3041439849],
    [0.00000000102, 2.67098847129, 76674.63652943878],
    [0.00000000101, 3.45368006563, 216.4804891757],
    [0.00000000141, 0.978371404, 1928.0986821894],
    [0.0000000011, 4.75552791514, 4525.4654024102],
    [0.00000000136, 2.95634362222, 2654.6746005965],
    [0.00000000117, 3.03207653301, 138.5174968707],
    [0.00000000103, 3.15211316765, 665.0270682276],
    [0.00000000114, 5.20332873854, 5165.3626887242],
    [0.00000000098, 3.35274897479, 945.2434557067],
    [0.00000000112, 3.22571898866, 207.1487562837],
    [0.00000000115, 5.2582673211, 1570.9136480191],
    [0.00000000129, 5.89324958473, 1892.9345919682],
    [0.00000000133, 5.40969546345, 8837.5117463652],
    [0.00000000127, 0.19511373745, 456.3938392356],
    [0.00000000095, 5.11134717491, 218.7157214094],
    [0.00000000129, 2.7992031502, 207.6700211455],
    [0.00000000128, 5.16273804969, 1116.0042814918],
    [0.00000000128, 5.32054284621, 2729.4561991638],
    [0.00000000101, 2.93939917431, 206.1373643274],
    [0.00000000096, 0.47328138882, 1016.8436605363],
    [0.00000000103, 3.17290498507, 1578.0271950199],
    [0.00000000112, 5.16202810068, 2115.5824666407],
    [0.00000000113, 4.06811228563, 4098.8672115342],
    [0.00000000098, 4.02726905635, 767.3690829208],
    [0.00000000107, 5.67649179323, 2534.0557185596],
    [0.00000000113, 0.42899403566, 1262.3860848887],
    [0.00000000091, 2.50588344443, 1151.4290041439],
    [0.00000000098, 5.16901597388, 931.0163617051],
    [0.00000000092, 0.93847984235, 2328.8815620787],
    [0.00000000125, 1.68566610565, 9470.2954856784],
    [0.0000000009, 2.41172638816, 1482.0479678021],
    [0.00000000113, 6.22440406397, 683.9894646444],
    [0.00000000122, 5.84483142299, 560.7104537316],
    [0.00000000113, 5.72804135152, 2193.4024465938],
    [0.00000000124, 4.9693651214, 127.4717966068],
    [0.0000000009, 3.39681429609, 104.5772469269],
    [0.00000000096, 1.14297748292, 326.6868103951],
    [0.00000000089, 1.66939269519, 285.3723810196],
    [0.00000000122, 0.26058689062, 5540.0857894588],
    [0.00000000117, 2.05812593742, 943.4983505675],
    [0.00000000089, 1.71994201813, 409.9234163196],
    [0.00000000119, 6.07546295756, 1902.2833712027],
    [0.00000000108, 2.46646168152, 154.2984995498],
    [0.00000000111, 0.3688386286, 988.532484885],
    [0.00000000087, 2.08484429465, 5268.4554629428],
    [0.00000000096, 0.93463112338, 13362.4497067992],
    [0.00000000119, 5.49010171814, 1230.1427559743],
    [0.00000000095, 3.61337090643, 908.3342603463],
    [0.00000000098, 5.71499113464, 3252.784376783],
    [0.00000000087, 0.7959304535, 347.4113582936],
    [0.00000000102, 5.98940693807, 119.767548775],
    [0.00000000085, 5.50544656379, 5702.1672008196],
    [0.00000000083, 2.84150479583, 129380.13377768178],
    [0.00000000091, 1.15815009961, 18307.8072320436],
    [0.00000000082, 0.46822230124, 5282.6825569444],
    [0.00000000115, 6.2533538371, 874.3940104025],
    [0.00000000087, 1.49767199949, 4863.1979130692],
    [0.00000000087, 1.8848334066, 135.336103133],
    [0.00000000084, 3.29665218667, 5908.3527492568],
    [0.00000000108, 3.02254015028, 946.4672959841],
    [0.00000000103, 6.09488105521, 1366.2125722902],
    [0.0000000008, 3.4679872109, 4127.3213995374],
    [0.00000000107, 4.01184763511, 686.958410061],
    [0.00000000111, 5.00871879991, 2758.6611466924],
    [0.00000000085, 0.05406029428, 902.7051860538],
    [0.00000000111, 0.94093990146, 602.9880909536],
    [0.00000000099, 1.78324836759, 395.105621487],
    [0.00000000078, 0.06242278836, 19896.8801273274],
    [0.00000000077, 1.54296619853, 1511.1099029788],
    [0.00000000077, 4.19341297522, 1681.8707287639],
    [0.00000000079, 2.00138256094, 487.1526954417],
    [0.00000000091, 0.96825490308, 622.4887985747],
    [0.00000000076, 1.38027555179, 429.7795846137],
    [0.00000000104, 5.17425913613, 733.428832977],
    [0.00000000102, 6.17241757578, 206.233732547],
    [0.00000000089, 2.86511152715, 771.3012361839],
    [0.00000000098, 2.32705469675, 115.6229471908],
    [0.00000000095, 0.75539381888, 661.0949149645],
    [0.00000000075, 3.2804210401, 1777.0991964563],
];

const K1: &[Term] = &[
    [0.00113010377, 0.0, 0.0],
    [0.00010303903, 0.33250058601, 7.1135470008],
    [0.00001978042, 1.13748818129, 110.2063212194],
    [0.00000894733, 1.54998963517, 206.1855484372],
    [0.00000477592, 0.20089705686, 14.2270940016],
    [0.00000276174, 1.22249279686, 522.5774180938],
    [0.00000302199, 0.70130814022, 95.9792272178],
    [0.00000234789, 1.63354982212, 103.0927742186],
    [0.00000231727, 0.49673960731, 426.598190876],
    [0.00000213237, 2.49932084383, 309.2783226558],
    [0.00000187215, 0.0246334101, 323.5054166574],
    [0.00000131774, 1.17271866474, 117.3198682202],
    [0.00000124881, 0.9204466379, 838.9692877504],
    [0.00000112707, 0.46053413371, 316.3918696566],
    [0.00000132903, 1.05746856938, 213.299095438],
    [0.00000105095, 1.66650545387, 199.0720014364],
    [0.00000087752, 2.22657265876, 625.6701923124],
    [0.00000079088, 0.42280753743, 412.3710968744],
    [0.00000068622, 0.83867037495, 1155.361157407],
    [0.00000076256, 0.07662090302, 742.9900605326],
    [0.00000057516, 3.5946680357, 949.1756089698],
    [0.00000046848, 5.07787724012, 632.7837393132],
    [0.00000050402, 5.31517063733, 220.4126424388],
    [0.00000050225, 2.03992742782, 942.062061969],
    [0.00000042149, 1.373892712, 515.463871093],
    [0.000000429, 3.25723851082, 1265.5674786264],
    [0.00000037189, 0.64268644424, 1471.7530270636],
    [0.00000044808, 0.7560876489, 529.6909650946],
    [0.00000037181, 5.51986454257, 639.897286314],
    [0.00000036316, 0.12848414325, 728.762966531],
    [0.00000028311, 2.9567881679, 1581.959348283],
    [0.00000030036, 1.82427584425, 1258.4539316256],
    [0.00000028304, 6.24591594933, 3.1813937377],
    [0.00000029478, 5.77013829119, 1059.3819301892],
    [0.00000023338, 1.08667821921, 831.8557407496],
    [0.00000024931, 4.96095969403, 536.8045120954],
    [0.00000025629, 2.63356879786, 302.164775655],
    [0.00000026075, 0.02610200523, 419.4846438752],
    [0.00000020261, 0.42945847019, 1788.1448967202],
    [0.00000022151, 0.49383842185, 846.0828347512],
    [0.00000017629, 2.67198525487, 1898.3512179396],
    [0.00000017653, 6.10742525657, 1045.1548361876],
    [0.00000018528, 4.15952922103, 1052.2683831884],
    [0.00000018384, 1.60249342962, 1574.8458012822],
    [0.00000020189, 4.59763413902, 735.8765135318],
    [0.00000013917, 0.84614893463, 1148.2476104062],
    [0.00000014767, 5.63357528858, 1692.1656695024],
    [0.00000015482, 2.81935003678, 3.9321532631],
    [0.00000013871, 3.83123196285, 1368.660252845],
    [0.00000015665, 5.5923667307, 1375.7737998458],
    [0.00000010953, 0.204361026, 2104.5367663768],
    [0.00000012755, 2.34612158068, 618.5566453116],
    [0.00000012786, 0.1772469752, 1162.4747044078],
    [0.00000011988, 1.4384855294, 1169.5882514086],
    [0.00000010635, 2.3959992404, 2214.7430875962],
    [0.00000012271, 6.1691216881, 330.6189636582],
    [0.0000000935, 4.32416069966, 853.196381752],
    [0.00000012355, 0.04179763009, 21.3406410024],
    [0.00000009843, 5.47363271935, 2008.557539159],
    [0.00000009822, 3.43596327173, 1685.0521225016],
    [0.00000011277, 1.37416340818, 1891.2376709388],
    [0.00000010164, 1.17286482725, 1485.9801210652],
    [0.00000008293, 0.59092587258, 1464.6394800628],
    [0.00000008398, 5.78728016033, 1361.5467058442],
    [0.0000000796, 2.08628158201, 934.9485149682],
    [0.00000006802, 3.10976449385, 2001.4439921582],
    [0.00000006294, 5.28258816148, 2324.9494088156],
    [0.00000007104, 0.92485164106, 1802.3719907218],
    [0.0000000626, 2.12902187742, 2531.1349572528],
    [0.00000005844, 6.25477465276, 2420.9286360334],
    [0.00000005524, 5.91776975861, 433.7117378768],
    [0.00000005737, 5.20784330366, 227.5261894396],
    [0.00000006875, 1.14006488595, 2207.6295405954],
    [0.00000005819, 1.81958010984, 1272.6810256272],
    [0.0000000668, 6.09313809482, 1478.8665740644],
    [0.00000004896, 0.33585574097, 1781.0313497194],
    [0.00000004403, 5.94717152407, 10.2949407385],
    [0.00000004568, 2.80069093177, 2317.8358618148],
    [0.00000005175, 1.82571331511, 1251.3403846248],
    [0.00000004814, 1.53575550735, 1589.0728952838],
    [0.00000003891, 5.07490482114, 2641.3412784722],
    [0.00000004545, 0.68513279458, 2118.7638603784],
    [0.0000000363, 6.15068739134, 99.1606209555],
    [0.00000003605, 2.40367630114, 11.0457002639],
    [0.00000003624, 1.86880451091, 2847.5268269094],
    [0.00000003383, 1.83096392646, 191.9584544356],
    [0.00000003723, 1.25722454019, 1905.4647649404],
    [0.00000003227, 0.0708862022, 106.2741679563],
    [0.00000003248, 3.53806158841, 149.5631971346],
    [0.0000000415, 0.90195299799, 2524.021410252],
    [0.00000003741, 5.43736608837, 1677.9385755008],
    [0.00000003955, 5.72171106954, 1795.258443721],
    [0.00000003138, 0.80096376179, 2221.856634597],
    [0.00000003066, 6.01714905126, 2737.32050569],
    [0.00000002846, 0.08015301049, 2097.423219376],
    [0.0000000299, 2.5042856584, 2634.2277314714],
    [0.00000003395, 1.56864301389, 1567.7322542814],
    [0.00000002749, 1.17284916212, 99.9113804809],
    [0.00000002661, 1.2267671427, 107.0249274817],
    [0.00000002536, 1.00589605796, 124.433415221],
    [0.00000002343, 4.85883408972, 2957.7331481288],
    [0.0000000289, 3.58827596517, 88.865680217],
    [0.00000002317, 0.50180819664, 2538.2485042536],
    [0.00000002781, 0.46436139679, 2435.155730035],
    [0.0000000239, 5.35471676751, 2111.6503133776],
    [0.00000002215, 3.33616700483, 750.1036075334],
    [0.00000002072, 1.61459268667, 3163.918696566],
    [0.00000001851, 5.09139202141, 647.0108333148],
    [0.00000001914, 2.21755255878, 2950.619601128],
    [0.00000002475, 0.66142444203, 2840.4132799086],
    [0.00000002101, 1.26035018756, 18.1592472647],
    [0.00000002213, 1.31242048015, 1884.124123938],
    [0.00000001702, 1.37045267325, 956.2891559706],
    [0.00000001748, 3.25191157312, 76.2660712756],
    [0.00000001682, 1.53592251369, 508.3503240922],
    [0.00000001623, 6.1075267355, 2413.8150890326],
    [0.00000001634, 0.21983214681, 2854.6403739102],
    [0.00000001578, 5.77734618101, 3053.7123753466],
    [0.00000001556, 1.05636473907, 4694.0029547076],
    [0.00000001507, 4.86793701402, 543.9180590962],
    [0.00000001675, 2.97745967317, 5753.3848848968],
    [0.00000001449, 0.06789770073, 92.0470739547],
    [0.00000001771, 1.32556951534, 305.3461693927],
    [0.00000001384, 4.63883545224, 3274.1250177854],
    [0.00000001535, 4.39922117693, 9683.5945811164],
    [0.00000001369, 2.47714454636, 8624.2126509272],
    [0.00000001455, 4.99862985684, 2428.0421830342],
    [0.00000001703, 0.26293933128, 2751.5475996916],
    [0.00000001152, 1.2266686169, 114.1384744825],
    [0.00000001202, 1.93912342302, 3267.0114707846],
    [0.00000001404, 2.10709633242, 1699.2792165032],
    [0.00000001426, 1.05733696437, 2200.5159935946],
    [0.00000001509, 4.99929729437, 1994.3304451574],
    [0.00000001459, 0.41936030999, 3156.8051495652],
    [0.00000001403, 2.70783777312, 1066.49547719],
    [0.00000001091, 1.25277764846, 824.7421937488],
    [0.0000000111, 6.23128879533, 3171.0322435668],
    [0.00000001173, 1.36613435422, 3480.3105662226],
    [0.00000001059, 5.99680674193, 12566.1516999828],
    [0.00000001012, 5.10320854476, 39.3568759152],
    [0.00000001331, 1.92241594427, 2015.6710861598],
    [0.00000000907, 5.85116143852, 2730.2069586892],
    [0.00000001238, 2.78040128413, 295.0512286542],
    [0.00000000804, 5.87628205889, 415.5524906121],
    [0.00000000805, 4.41751413352, 3590.516887442],
    [0.00000000934, 2.03029021706, 210.1177017003],
    [0.00000001104, 1.70997167492, 2332.0629558164],
    [0.00000000886, 4.65450108032, 2744.4340526908],
    [0.00000001013, 0.07795138309, 3067.9394693482],
    [0.00000000792, 5.53618497515, 3370.1042450032],
    [0.00000000715, 0.88912002409, 416.3032501375],
    [0.00000000728, 0.99741366064, 1141.1340634054],
    [0.00000000709, 5.71185741219, 422.6660376129],
    [0.00000000743, 1.6668788801, 3583.4033404412],
    [0.00000000732, 5.9662585378, 3487.4241132234],
    [0.00000000907, 0.80259222326, 2516.9078632512],
    [0.00000000956, 0.67184272749, 113.3877149571],
    [0.00000000693, 4.01009730103, 81.7521332162],
    [0.00000000674, 0.66598451512, 423.4167971383],
    [0.00000000849, 0.17648518548, 3473.1970192218],
    [0.00000000835, 1.486376574, 2648.454825473],
    [0.00000000643, 5.09170480579, 6681.2248533996],
    [0.00000000659, 1.12369773843, 3796.7024358792],
    [0.00000000667, 5.5090666972, 5216.5803728014],
    [0.00000000665, 5.02500627263, 5230.807466803],
    [0.0000000063, 2.24757288529, 121.2520214833],
    [0.00000000573, 4.83941996995, 70.8494453042],
    [0.00000000711, 5.23113530042, 230.5645708254],
    [0.00000000697, 2.11725496097, 203.0041546995],
    [0.00000000582, 5.38430883226, 32.2433289144],
    [0.00000000596, 0.6488412051, 9146.790069021],
    [0.00000000595, 0.16478079472, 9161.0171630226],
    [0.00000000543, 4.30192093986, 2310.722314814],
    [0.00000000713, 2.49051707061, 611.4430983108],
    [0.000000006, 6.19086014481, 3384.3313390048],
    [0.00000000537, 4.32205904781, 3060.8259223474],
    [0.00000000495, 5.59455122569, 3046.5988283458],
    [0.00000000513, 0.58769104645, 209.3669421749],
    [0.00000000468, 0.92434260765, 20426.571092422],
    [0.00000000463, 4.19560491888, 3906.9087570986],
    [0.00000000595, 1.25806037803, 2964.8466951296],
    [0.00000000475, 0.74175901634, 1457.525933062],
    [0.00000000487, 0.59129209788, 195.1398481733],
    [0.00000000471, 5.70723953164, 3803.81598288],
    [0.00000000568, 0.54708320508, 2833.2997329078],
    [0.00000000452, 1.40048804338, 3899.7952100978],
    [0.00000000435, 5.91564067877, 224.3447957019],
    [0.00000000417, 4.36477439254, 440.8252848776],
    [0.00000000469, 5.91850001785, 52175.8062831484],
    [0.00000000509, 2.62554597833, 1382.8873468466],
    [0.00000000489, 6.21707090283, 3789.5888888784],
    [0.00000000379, 4.80161142456, 11506.7697697936],
    [0.00000000373, 5.59314969772, 731.9443602687],
    [0.00000000371, 2.92700719574, 217.2312487011],
    [0.00000000384, 4.40153250808, 6812.766815086],
    [0.00000000368, 0.4161832329, 202.2533951741],
    [0.00000000375, 5.82338584569, 10742.9765113056],
    [0.00000000493, 2.20717318537, 927.8349679674],
    [0.00000000387, 5.29669022874, 3686.4961146598],
    [0.00000000355, 0.55331577649, 430.5303441391],
    [0.00000000346, 0.58957974786, 732.6951197941],
    [0.00000000425, 1.10760909268, 909.8187330546],
    [0.00000000348, 1.47831821226, 526.5095713569],
    [0.00000000409, 1.02850376377, 3281.2385647862],
    [0.00000000337, 4.04483400096, 860.3099287528],
    [0.00000000368, 0.8855187875, 4113.0943055358],
    [0.00000000317, 5.91770450296, 408.4389436113],
    [0.00000000356, 6.03322193325, 3700.7232086614],
    [0.00000000324, 3.99886934448, 3377.217792004],
    [0.00000000305, 5.36871602881, 739.0579072695],
    [0.00000000334, 4.03953482769, 373.0142209592],
    [0.00000000296, 0.29202221929, 739.8086667949],
    [0.000000003, 0.48985087891, 1773.9178027186],
    [0.00000000397, 1.64576400262, 405.2575498736],
    [0.00000000367, 3.72661542106, 387.2413149608],
    [0.00000000296, 5.45130369664, 4120.2078525366],
    [0.0000000027, 3.09397749281, 67.6680515665],
    [0.00000000348, 2.74226463492, 760.25553592],
    [0.00000000341, 5.99335640816, 337.732510659],
    [0.00000000263, 3.97574104995, 4223.3006267552],
    [0.00000000351, 0.29323289652, 3149.6916025644],
    [0.00000000264, 5.33744075596, 3362.9906980024],
    [0.0000000026, 5.0538412223, 234.6397364404],
    [0.00000000272, 1.13986600103, 4216.1870797544],
    [0.00000000352, 1.94262503743, 1244.226837624],
    [0.00000000308, 4.03686019522, 74.7815985673],
    [0.00000000249, 3.894228899, 5621.8429232104],
    [0.00000000256, 2.23311997829, 2943.5060541272],
    [0.00000000284, 1.78519037602, 519.3960243561],
    [0.00000000274, 3.11041615858, 2627.1141844706],
    [0.0000000027, 0.80322016963, 3597.6304344428],
    [0.00000000277, 5.97650401061, 4105.980758535],
    [0.00000000226, 1.74345118776, 3259.8979237838],
    [0.00000000226, 0.28265571118, 312.4597163935],
    [0.00000000213, 0.57836785792, 46.470422916],
    [0.00000000213, 2.68903828896, 78263.70942472259],
    [0.00000000212, 5.88369016602, 4017.115078318],
    [0.00000000212, 2.19030278596, 1987.2168981566],
    [0.00000000219, 2.371619038, 1670.8250285],
    [0.00000000188, 5.33566346157, 1048.3362299253],
    [0.00000000192, 1.14584336849, 842.9014410135],
    [0.00000000187, 6.19489948382, 525.7588118315],
    [0.0000000019, 3.85212974527, 2228.9701815978],
    [0.00000000245, 2.73553258066, 313.2104759189],
    [0.00000000185, 5.81478646009, 827.9235874865],
    [0.00000000194, 3.6835705624, 3693.6096616606],
    [0.00000000231, 1.53892235433, 298.2326223919],
    [0.0000000018, 0.28630667614, 1049.0869894507],
    [0.00000000178, 1.37370685241, 3576.2897934404],
    [0.0000000025, 1.68087442501, 1560.6187072806],
    [0.00000000176, 3.44429097246, 2545.3620512544],
    [0.00000000184, 0.24093221396, 2090.3096723752],
    [0.00000000215, 4.5502776028, 1912.5783119412],
    [0.00000000204, 0.65285691602, 4429.4861751924],
    [0.00000000183, 5.19770575968, 4436.5997221932],
    [0.00000000179, 0.24383270039, 511.5317178299],
    [0.00000000184, 1.96596508137, 2303.6087678132],
    [0.00000000177, 5.5020799166, 1751.539531416],
    [0.00000000203, 2.85386894024, 155.7829722581],
    [0.00000000235, 1.3790013842, 721.6494195302],
    [0.00000000181, 5.06128487406, 4002.8879843164],
    [0.00000000163, 6.00482802801, 19367.1891622328],
    [0.00000000156, 4.24280022364, 245.5424243524],
    [0.00000000165, 3.09729448532, 306.0969289181],
    [0.00000000201, 4.87307677202, 1596.1864422846],
    [0.00000000173, 5.87744127474, 319.5732633943],
    [0.00000000178, 2.4289980214, 320.3240229197],
    [0.00000000213, 0.03745831807, 3466.083472221],
    [0.00000000155, 5.61248584891, 10213.285546211],
    [0.00000000161, 3.1179350095, 1364.7280995819],
    [0.00000000153, 3.09565642011, 2861.753920911],
    [0.0000000016, 3.65789698066, 398.1440028728],
    [0.00000000161, 3.54530056427, 757.2171545342],
    [0.00000000165, 0.10044679787, 746.9222137957],
    [0.00000000161, 0.88237219162, 4532.578949411],
    [0.0000000015, 6.18376784273, 518.6452648307],
    [0.00000000173, 0.58070636721, 3914.0223040994],
    [0.00000000149, 3.76013266182, 4539.6924964118],
    [0.00000000152, 6.21124019602, 1056.2005364515],
    [0.00000000149, 5.06800549782, 1055.4497769261],
    [0.00000000174, 0.74384272544, 4164.311989613],
    [0.00000000143, 2.02024290464, 1038.0412891868],
    [0.00000000172, 3.98189401502, 100.6450936638],
    [0.00000000159, 3.99374293722, 1809.4855377226],
    [0.00000000148, 1.73384188103, 2620.0006374698],
    [0.00000000166, 5.40974866389, 842.1506814881],
    [0.00000000137, 5.55647767262, 724.8308132679],
    [0.00000000189, 2.43074475994, 1354.4331588434],
    [0.00000000157, 4.70881758811, 51116.4243529592],
    [0.00000000135, 5.43176197477, 10021.8372800994],
    [0.00000000136, 5.08097581272, 3679.382567659],
    [0.00000000162, 1.49812150511, 835.7878940127],
    [0.00000000165, 3.10648510396, 105.5404547734],
    [0.0000000013, 1.05569351507, 3892.681663097],
    [0.00000000156, 5.737422748, 4422.3726281916],
    [0.00000000151, 2.14756883347, 8094.5216858326],
    [0.00000000176, 1.41888419133, 1877.0105769372],
    [0.00000000128, 5.73866817271, 4333.5069479746],
    [0.00000000125, 2.78080706279, 3178.1457905676],
    [0.00000000137, 4.32248789487, 142.4496501338],
    [0.00000000143, 3.75840340694, 2125.8774073792],
    [0.00000000151, 1.5251133629, 1159.2933106701],
    [0.00000000145, 0.35646851036, 685.4739373527],
    [0.00000000132, 4.28179393435, 1493.093668066],
    [0.00000000115, 3.37497698768, 4010.0015313172],
    [0.0000000011, 2.12096148157, 327.4375699205],
    [0.0000000011, 1.39280927416, 415.2918581812],
    [0.00000000113, 1.48354841395, 2936.3925071264],
    [0.00000000121, 4.84292053051, 9153.9036160218],
    [0.00000000126, 1.09670729363, 2810.9214616052],
    [0.00000000112, 4.94923215597, 4752.9915918498],
    [0.00000000107, 6.28190158216, 2406.7015420318],
    [0.00000000102, 4.98893906115, 355.7487455718],
    [0.00000000097, 2.49152096696, 3494.5376602242],
    [0.00000000107, 0.56268072893, 1158.5425511447],
    [0.00000000109, 0.36281182031, 4230.414173756],
    [0.00000000102, 3.4066747444, 454.9093665273],
    [0.00000000096, 6.27723730662, 1365.4788591073],
    [0.00000000111, 5.61204906904, 25558.2121764796],
    [0.00000000113, 3.55259220316, 2442.2692770358],
    [0.00000000113, 0.42405035278, 4745.878044849],
    [0.00000000128, 6.0699520125, 3782.4753418776],
    [0.00000000117, 1.46503248338, 983.1158589136],
    [0.0000000009, 0.76949293205, 4209.0735327536],
    [0.00000000116, 3.61818219222, 5223.6939198022],
    [0.00000000121, 1.16067612656, 2193.4024465938],
    [0.00000000095, 0.63582511623, 4848.9708190676],
    [0.00000000093, 3.72963137278, 24498.8302462904],
    [0.00000000102, 1.38887528585, 1475.6851803267],
    [0.00000000094, 3.31357102986, 714.5358725294],
    [0.00000000113, 5.32948792215, 1279.794572628],
    [0.00000000113, 2.48052647462, 629.6023455755],
    [0.00000000092, 3.99187210642, 69.1525242748],
    [0.00000000087, 2.86400153099, 1969.2006632438],
    [0.00000000102, 4.63442540023, 604.4725636619],
    [0.00000000078, 5.34432151264, 4701.1165017084],
    [0.00000000077, 5.74079351309, 104351.61256629678],
    [0.00000000078, 5.16168461554, 4686.8894077068],
    [0.00000000084, 4.37154741123, 446.3113468182],
    [0.00000000081, 5.23960846473, 1432.3961511484],
    [0.00000000094, 4.16691628448, 1215.1649024473],
];

const K2: &[Term] = &[
    [0.00010930126, PI, 0.0],
    [0.00001442597, 4.88233039271, 7.1135470008],
    [0.00000179812, 5.41803419096, 110.2063212194],
    [0.00000163137, 4.7804122682, 14.2270940016],
    [0.00000090806, 3.5059328901, 103.0927742186],
    [0.00000066427, 3.3967129125, 206.1855484372],
    [0.0000006251, 2.41200590217, 95.9792272178],
    [0.00000036027, 5.74898172405, 117.3198682202],
    [0.00000028779, 3.37645318565, 199.0720014364],
    [0.00000029611, 4.23036170671, 309.2783226558],
    [0.0000002838, 4.788340223, 426.598190876],
    [0.00000026043, 4.59112477247, 323.5054166574],
    [0.00000019741, 3.02538560196, 522.5774180938],
    [0.00000016489, 2.1336266188, 412.3710968744],
    [0.000000207, 5.62213573936, 213.299095438],
    [0.00000015858, 3.10964022188, 419.4846438752],
    [0.00000011522, 3.08165226001, 515.463871093],
    [0.00000010611, 3.58246253731, 220.4126424388],
    [0.00000012043, 4.41316124893, 742.9900605326],
    [0.00000012017, 3.98704966554, 625.6701923124],
    [0.00000008877, 2.72651882385, 838.9692877504],
    [0.00000007475, 1.81763606752, 728.762966531],
    [0.00000007117, 4.45597202314, 3.1813937377],
    [0.0000000875, 4.34088208432, 302.164775655],
    [0.00000006367, 2.7924108422, 831.8557407496],
    [0.0000000609, 2.13916703174, 316.3918696566],
    [0.00000006718, 4.60687289289, 21.3406410024],
    [0.00000006375, 2.91065924541, 1155.361157407],
    [0.00000007426, 3.89809684078, 942.062061969],
    [0.00000005345, 3.23542668294, 536.8045120954],
    [0.00000005731, 4.00512832503, 1059.3819301892],
    [0.00000005916, 5.34173814974, 529.6909650946],
    [0.00000004347, 4.33520717281, 949.1756089698],
    [0.00000004698, 3.73674437662, 1258.4539316256],
    [0.00000004547, 4.01154381116, 639.897286314],
    [0.00000003823, 2.57005266894, 1148.2476104062],
    [0.00000004747, 2.98047386298, 735.8765135318],
    [0.00000003589, 1.47600905769, 1045.1548361876],
    [0.00000004349, 4.05642680154, 618.5566453116],
    [0.00000003299, 4.16395598077, 1265.5674786264],
    [0.00000004194, 4.47495988936, 330.6189636582],
    [0.00000003884, 2.78078715692, 1471.7530270636],
    [0.00000003066, 3.77414846052, 1375.7737998458],
    [0.00000003031, 3.55371041393, 1574.8458012822],
    [0.00000003584, 4.76758958544, 1162.4747044078],
    [0.00000002343, 3.50779403973, 227.5261894396],
    [0.00000002283, 2.32235095705, 1464.6394800628],
    [0.00000002237, 3.96634292834, 1581.959348283],
    [0.0000000242, 6.07198216864, 1169.5882514086],
    [0.00000002106, 3.33043156173, 632.7837393132],
    [0.00000002814, 5.07759854535, 846.0828347512],
    [0.00000002723, 3.80915488923, 934.9485149682],
    [0.00000002689, 4.50088621252, 1478.8665740644],
    [0.00000001895, 2.63304159445, 853.196381752],
    [0.00000002071, 5.80576332481, 1485.9801210652],
    [0.00000001945, 3.35213916596, 1891.2376709388],
    [0.00000002303, 2.60613292914, 1788.1448967202],
    [0.00000001516, 4.15794881991, 10.2949407385],
    [0.00000001591, 3.53769427677, 191.9584544356],
    [0.00000001685, 1.09114185459, 1361.5467058442],
    [0.00000001429, 3.76252101199, 1898.3512179396],
    [0.00000001912, 3.80123604313, 1692.1656695024],
    [0.00000001835, 4.2327482825, 1795.258443721],
    [0.00000001348, 2.07176290678, 1781.0313497194],
    [0.00000001778, 3.56012957832, 1251.3403846248],
    [0.00000001452, 5.56452845638, 1802.3719907218],
    [0.0000000123, 3.13737831515, 2207.6295405954],
    [0.00000001075, 6.13990967554, 1272.6810256272],
    [0.00000001178, 5.56460963631, 124.433415221],
    [0.00000001076, 4.28819703835, 433.7117378768],
    [0.00000001398, 2.80935847576, 1052.2683831884],
    [0.00000001205, 5.29298845751, 88.865680217],
    [0.00000001323, 2.4134967367, 2104.5367663768],
    [0.00000001128, 3.70533231219, 2008.557539159],
    [0.00000000934, 4.39425527878, 106.2741679563],
    [0.00000000891, 3.55977533904, 2214.7430875962],
    [0.00000000901, 5.89334226326, 1589.0728952838],
    [0.00000001196, 3.96918394662, 2111.6503133776],
    [0.00000001171, 3.31197680814, 1567.7322542814],
    [0.00000000935, 5.33563523949, 2118.7638603784],
    [0.00000000782, 1.81725306112, 2097.423219376],
    [0.00000000789, 3.22464124473, 508.3503240922],
    [0.00000000815, 3.02536020672, 99.9113804809],
    [0.00000000765, 2.91545456903, 2524.021410252],
    [0.00000000688, 5.6267665438, 1905.4647649404],
    [0.00000000671, 3.60129159289, 2324.9494088156],
    [0.00000000612, 3.18326314185, 543.9180590962],
    [0.00000000736, 2.21401363156, 2420.9286360334],
    [0.00000000657, 5.76170029237, 956.2891559706],
    [0.00000000766, 3.06534238316, 1884.124123938],
    [0.00000000755, 3.7113483036, 2428.0421830342],
    [0.00000000556, 3.47960686453, 647.0108333148],
    [0.00000000553, 5.34558504876, 2221.856634597],
    [0.00000000677, 4.49047828919, 295.0512286542],
    [0.00000000744, 0.61854932976, 1677.9385755008],
    [0.00000000541, 3.36095664196, 2531.1349572528],
    [0.00000000687, 1.52967505844, 750.1036075334],
    [0.00000000512, 2.94650799044, 824.7421937488],
    [0.00000000574, 5.1259733482, 2435.155730035],
    [0.00000000466, 2.68891031608, 2840.4132799086],
    [0.00000000443, 5.78379352209, 81.7521332162],
    [0.00000000443, 1.56340235146, 2413.8150890326],
    [0.00000000396, 5.10199480957, 2538.2485042536],
    [0.00000000401, 3.48886428797, 2641.3412784722],
    [0.00000000437, 0.92734142907, 1066.49547719],
    [0.00000000392, 4.32186529593, 99.1606209555],
    [0.00000000496, 2.81513185025, 2200.5159935946],
    [0.00000000382, 4.44882024826, 2001.4439921582],
    [0.0000000048, 3.28409072223, 107.0249274817],
    [0.00000000464, 3.45629523471, 2744.4340526908],
    [0.00000000398, 2.01631171724, 2737.32050569],
    [0.00000000392, 0.46044872404, 1699.2792165032],
    [0.0000000034, 4.27820068765, 2317.8358618148],
    [0.00000000324, 4.4287435946, 1685.0521225016],
    [0.00000000324, 3.16222565947, 2847.5268269094],
    [0.00000000342, 2.68883133732, 1141.1340634054],
    [0.00000000389, 4.19695052327, 611.4430983108],
    [0.00000000326, 6.22995496585, 1994.3304451574],
    [0.0000000036, 0.29297498096, 2015.6710861598],
    [0.00000000281, 2.46216551773, 3156.8051495652],
    [0.00000000272, 4.86333761196, 2854.6403739102],
    [0.00000000348, 4.94190883873, 2751.5475996916],
    [0.00000000294, 5.08627458887, 113.3877149571],
    [0.00000000263, 4.06495928403, 2634.2277314714],
    [0.00000000316, 2.56740828725, 2516.9078632512],
    [0.0000000024, 3.36564705192, 2957.7331481288],
    [0.00000000245, 1.30543753403, 2730.2069586892],
    [0.00000000234, 2.94386520075, 1368.660252845],
    [0.00000000281, 3.20665352078, 3060.8259223474],
    [0.00000000294, 0.09732802088, 2332.0629558164],
    [0.00000000267, 3.90632081018, 927.8349679674],
    [0.00000000222, 2.43222632292, 1457.525933062],
    [0.00000000216, 2.71725763528, 416.3032501375],
    [0.00000000212, 3.87380842186, 422.6660376129],
    [0.00000000195, 2.61394533011, 440.8252848776],
    [0.0000000023, 3.97013826023, 203.0041546995],
    [0.00000000191, 2.96704837106, 3163.918696566],
    [0.0000000021, 1.82799953115, 3053.7123753466],
    [0.00000000183, 5.339309802, 2310.722314814],
    [0.00000000177, 2.28866460487, 149.5631971346],
    [0.00000000208, 0.72305120605, 1382.8873468466],
    [0.0000000019, 3.83834497597, 2950.619601128],
    [0.00000000181, 4.62591384855, 3171.0322435668],
    [0.00000000199, 4.00487039019, 210.1177017003],
    [0.00000000188, 4.26419491479, 337.732510659],
    [0.00000000166, 2.23820066309, 3473.1970192218],
    [0.0000000022, 6.16540362262, 2648.454825473],
    [0.00000000197, 2.31571061491, 2833.2997329078],
    [0.00000000206, 4.77001487614, 3067.9394693482],
    [0.00000000153, 3.26543119891, 234.6397364404],
    [0.00000000191, 3.64372853055, 1244.226837624],
    [0.00000000143, 3.23498587999, 3274.1250177854],
    [0.00000000167, 2.95881992931, 3377.217792004],
    [0.0000000014, 2.17509819923, 1773.9178027186],
    [0.00000000132, 1.04100914714, 3046.5988283458],
    [0.00000000154, 3.35154016564, 405.2575498736],
    [0.00000000119, 4.90282470205, 209.3669421749],
    [0.0000000013, 3.60098081433, 3267.0114707846],
    [0.00000000155, 5.94180930265, 2964.8466951296],
    [0.00000000121, 2.35483363289, 860.3099287528],
    [0.00000000117, 4.39269169138, 3487.4241132234],
    [0.00000000117, 2.64713422461, 423.4167971383],
    [0.00000000142, 4.58900797646, 2627.1141844706],
    [0.00000000112, 2.77361784799, 3480.3105662226],
    [0.00000000136, 3.37755187853, 1560.6187072806],
    [0.00000000104, 1.94187110895, 76.2660712756],
];

const K3: &[Term] = &[
    [0.00000428748, PI, 0.0],
    [0.00000135595, 3.10018478882, 7.1135470008],
    [0.00000037146, 3.06589701418, 14.2270940016],
    [0.00000016151, 3.3647099995, 110.2063212194],
    [0.00000008689, 4.14591344916, 95.9792272178],
    [0.00000006612, 4.01825498483, 117.3198682202],
    [0.00000005311, 5.11027691675, 199.0720014364],
    [0.00000003939, 5.39365385054, 206.1855484372],
    [0.00000003369, 2.91107013377, 426.598190876],
    [0.00000003325, 5.18768526464, 103.0927742186],
    [0.00000002311, 3.86993934784, 412.3710968744],
    [0.00000002764, 6.00565036557, 309.2783226558],
    [0.00000002122, 4.80854806375, 515.463871093],
    [0.0000000213, 2.88791745502, 21.3406410024],
    [0.00000002396, 2.82381506924, 323.5054166574],
    [0.00000001997, 6.05915033652, 302.164775655],
    [0.00000001492, 1.80133723758, 220.4126424388],
    [0.00000001523, 2.60884009791, 742.9900605326],
    [0.00000001695, 3.90741949743, 213.299095438],
    [0.00000001169, 4.51191715989, 831.8557407496],
    [0.00000001023, 3.50900152522, 728.762966531],
    [0.00000001017, 4.90580162952, 522.5774180938],
    [0.00000001111, 5.81497894626, 625.6701923124],
    [0.00000000952, 2.75928387743, 330.6189636582],
    [0.00000000996, 5.77391392792, 618.5566453116],
    [0.00000000818, 5.85889050094, 942.062061969],
    [0.00000000757, 1.45771881597, 536.8045120954],
    [0.00000000769, 2.30284172376, 1059.3819301892],
    [0.00000000715, 1.77359136418, 227.5261894396],
    [0.0000000071, 4.31109747873, 1148.2476104062],
    [0.00000000576, 5.73429300099, 1258.4539316256],
    [0.00000000625, 5.54027576267, 934.9485149682],
    [0.00000000567, 4.9948316176, 1155.361157407],
    [0.00000000575, 3.63117933367, 529.6909650946],
    [0.00000000485, 3.08837764022, 1045.1548361876],
    [0.00000000441, 4.56280191199, 838.9692877504],
    [0.00000000437, 0.79596099073, 88.865680217],
    [0.00000000487, 5.28537752352, 191.9584544356],
    [0.00000000401, 5.56637933521, 1574.8458012822],
    [0.00000000428, 4.07093362557, 1464.6394800628],
    [0.00000000409, 2.08310402556, 1375.7737998458],
    [0.00000000386, 3.90971648644, 316.3918696566],
    [0.0000000039, 4.84962053759, 1471.7530270636],
    [0.00000000411, 5.30222830024, 1251.3403846248],
    [0.00000000353, 2.4175068647, 639.897286314],
    [0.0000000032, 4.4719192978, 1169.5882514086],
    [0.00000000337, 3.86949276358, 124.433415221],
    [0.00000000271, 5.3672338832, 1891.2376709388],
    [0.00000000275, 3.87946685835, 419.4846438752],
    [0.00000000278, 0.87378512219, 853.196381752],
    [0.0000000028, 4.18501731736, 1485.9801210652],
    [0.00000000247, 4.65978387763, 1788.1448967202],
    [0.00000000274, 5.06447799792, 1567.7322542814],
    [0.00000000252, 3.82936133988, 1781.0313497194],
    [0.00000000286, 3.37010501596, 846.0828347512],
    [0.00000000247, 4.93827539502, 508.3503240922],
    [0.00000000232, 6.23328913886, 295.0512286542],
    [0.000000002, 1.45450083377, 543.9180590962],
    [0.0000000023, 1.01361009167, 949.1756089698],
    [0.00000000234, 1.36630788686, 1052.2683831884],
    [0.00000000222, 1.95663008035, 1692.1656695024],
    [0.00000000192, 1.30865474605, 81.7521332162],
    [0.00000000219, 1.66053161362, 735.8765135318],
    [0.00000000228, 2.56850742389, 1361.5467058442],
    [0.00000000177, 5.15102555896, 2207.6295405954],
    [0.00000000198, 3.95090527105, 1802.3719907218],
    [0.00000000185, 0.80248845658, 1265.5674786264],
    [0.00000000185, 1.11146127855, 1368.660252845],
    [0.0000000018, 4.82848091602, 1884.124123938],
    [0.00000000157, 4.27731912902, 1272.6810256272],
    [0.00000000162, 4.66124977342, 824.7421937488],
    [0.00000000146, 4.46986825125, 2104.5367663768],
];

const K4: &[Term] = &[
    [0.00000020539, 0.0, 0.0],
    [0.00000010306, 1.36883311604, 7.1135470008],
    [0.0000000626, 1.34333875901, 14.2270940016],
    [0.00000001356, 1.45198427836, 110.2063212194],
    [0.00000000899, 5.90893387709, 95.9792272178],
    [0.0000000084, 2.37072626869, 117.3198682202],
    [0.000000007, 0.50391471466, 199.0720014364],
    [0.00000000318, 1.10109329644, 426.598190876],
    [0.00000000344, 1.49183818528, 302.164775655],
    [0.00000000272, 0.1337746024, 515.463871093],
    [0.00000000235, 5.65753750945, 412.3710968744],
    [0.00000000236, 0.63469222907, 103.0927742186],
];

const H0: &[Term] = &[
    [0.01200385748, 0.0, 0.0],
    [0.00064278139, 0.39928981461, 103.0927742186],
    [0.00037689163, 0.46902799622, 7.1135470008],
    [0.00012686502, 1.52173271472, 110.2063212194],
    [0.00010468075, 0.14414631816, 419.4846438752],
    [0.00006402161, 1.39213151486, 206.1855484372],
    [0.0000791439, 2.52216677357, 213.299095438],
    [0.00003749183, 6.17601797762, 735.8765135318],
    [0.00002842733, 2.22519565559, 529.6909650946],
    [0.00002032835, 1.12581931301, 522.5774180938],
    [0.00001205591, 3.58200423326, 316.3918696566],
    [0.00001580155, 5.93627628914, 1052.2683831884],
    [0.00001251514, 0.53303247088, 426.598190876],
    [0.00001501758, 4.71935111593, 1162.4747044078],
    [0.00000932255, 0.85889457799, 838.9692877504],
    [0.00000790731, 2.3868667658, 309.2783226558],
    [0.0000103816, 0.18273665816, 6283.0758499914],
    [0.00000982483, 1.60531456988, 10213.285546211],
    [0.00000692021, 1.74962455882, 632.7837393132],
    [0.00000703192, 0.15957356846, 323.5054166574],
    [0.00000757793, 0.56845752824, 95.9792272178],
    [0.0000070775, 0.32869131021, 14.2270940016],
    [0.00000841281, 4.46072048366, 1478.8665740644],
    [0.00000715303, 5.70702919909, 1368.660252845],
    [0.00000456553, 0.51831434184, 1155.361157407],
    [0.00000496493, 0.4648117905, 949.1756089698],
    [0.00000523401, 2.07592722322, 846.0828347512],
    [0.00000362018, 0.0634371315, 1265.5674786264],
    [0.00000344135, 2.07870271527, 625.6701923124],
    [0.00000444578, 4.19366076628, 1795.258443721],
    [0.00000402081, 2.1248584914, 5223.6939198022],
    [0.00000339714, 5.48652148451, 1685.0521225016],
    [0.00000359617, 3.54783550291, 9153.9036160218],
    [0.00000243988, 1.30951249859, 117.3198682202],
    [0.00000237397, 6.01396932048, 1581.959348283],
    [0.00000236476, 0.22109334122, 1471.7530270636],
    [0.00000282065, 3.77178752149, 380.12776796],
    [0.00000242669, 1.3082717881, 742.9900605326],
    [0.00000194058, 1.54132097371, 199.0720014364],
    [0.00000179992, 1.73004816014, 942.062061969],
    [0.00000195255, 5.47453781417, 639.897286314],
    [0.00000228836, 3.92960294226, 2111.6503133776],
    [0.00000192788, 0.31774558553, 412.3710968744],
    [0.00000147418, 5.70783554919, 1898.3512179396],
    [0.00000166131, 5.27928826644, 2001.4439921582],
    [0.00000170389, 0.77684553548, 74.7815985673],
    [0.00000124922, 6.21889007246, 1788.1448967202],
    [0.0000010267, 1.39587976193, 1258.4539316256],
    [0.00000120671, 5.50795356956, 220.4126424388],
    [0.00000109592, 2.78522580175, 3.9321532631],
    [0.00000088547, 5.41627492974, 2214.7430875962],
    [0.00000116096, 3.66946476921, 2428.0421830342],
    [0.00000092007, 0.08730591611, 728.762966531],
    [0.00000078577, 1.26810167297, 515.463871093],
    [0.00000083299, 5.08209180271, 2317.8358618148],
    [0.00000067475, 1.81904652357, 1375.7737998458],
    [0.00000066723, 5.94539776008, 2104.5367663768],
    [0.0000008903, 4.63373995153, 3340.6124266998],
    [0.0000008856, 2.82761125829, 26087.9031415742],
    [0.00000062843, 2.14561596973, 1059.3819301892],
    [0.00000073989, 5.53103144943, 1692.1656695024],
    [0.00000060148, 1.06818192197, 1574.8458012822],
    [0.00000070825, 2.9220290677, 149.5631971346],
    [0.00000075262, 1.40109905715, 305.3461693927],
    [0.0000007151, 4.11236073684, 453.424893819],
    [0.00000051913, 5.13534862989, 2531.1349572528],
    [0.00000059168, 5.28615308851, 2008.557539159],
    [0.00000059632, 5.17808427058, 536.8045120954],
    [0.00000062136, 0.60564183936, 38.1330356378],
    [0.00000043865, 1.00329807666, 831.8557407496],
    [0.00000058289, 3.41382241488, 2744.4340526908],
    [0.00000046826, 6.16560669936, 1045.1548361876],
    [0.00000042676, 4.89273728328, 2634.2277314714],
    [0.0000003558, 0.74924752266, 1891.2376709388],
    [0.00000048386, 0.1665750554, 3.1813937377],
    [0.00000041125, 5.03120961763, 2324.9494088156],
    [0.0000003587, 5.6834129433, 2420.9286360334],
    [0.000000382, 2.51532756137, 302.164775655],
    [0.00000041074, 5.16391778204, 835.0371344873],
    [0.00000029905, 4.86203481468, 2847.5268269094],
    [0.00000032854, 2.5249149207, 76.2660712756],
    [0.00000035571, 5.74032715923, 5753.3848848968],
    [0.0000003858, 0.29233884062, 2281.2304965106],
    [0.0000003134, 1.78097763493, 4694.0029547076],
    [0.00000032644, 0.87914110521, 9683.5945811164],
    [0.00000030974, 1.45913547502, 1169.5882514086],
    [0.00000025651, 0.71660426133, 1148.2476104062],
    [0.00000027391, 3.19906494911, 8624.2126509272],
    [0.00000026528, 4.77415785145, 2641.3412784722],
    [0.00000023623, 4.57606101908, 853.196381752],
    [0.00000024128, 5.99108519481, 1361.5467058442],
    [0.00000030691, 4.77510118102, 25028.521211385],
    [0.00000029004, 3.16315636136, 3060.8259223474],
    [0.00000022287, 4.70846021817, 2950.619601128],
    [0.00000021085, 0.4398676603, 2207.6295405954],
    [0.00000025783, 1.20634548968, 1485.9801210652],
    [0.00000018804, 2.81891605978, 1272.6810256272],
    [0.00000019367, 5.43256224468, 2737.32050569],
    [0.00000019381, 2.22362621554, 618.5566453116],
    [0.00000023301, 1.83200494175, 1439.5096981492],
    [0.00000016992, 4.59509657036, 3163.918696566],
    [0.00000016275, 2.51033669558, 1589.0728952838],
    [0.00000016892, 4.1232351984, 11.0457002639],
    [0.00000022319, 3.57401985326, 1.4844727083],
    [0.00000018314, 0.0125814017, 330.6189636582],
    [0.00000015234, 0.4479337194, 1464.6394800628],
    [0.00000018048, 5.87913422668, 52175.8062831484],
    [0.0000001578, 6.00171944236, 433.7117378768],
    [0.00000017344, 0.13963682332, 12566.1516999828],
    [0.00000014491, 2.16113430026, 1905.4647649404],
    [0.00000017835, 0.95498273174, 1802.3719907218],
    [0.00000016342, 4.5154802957, 2957.7331481288],
    [0.00000013778, 4.26827175288, 956.2891559706],
    [0.00000012472, 0.14002556601, 2524.021410252],
    [0.00000012535, 5.85162691324, 1677.9385755008],
    [0.00000011837, 4.52631437531, 3267.0114707846],
    [0.00000014938, 5.31330534825, 230.5645708254],
    [0.00000014306, 2.91831975397, 3377.217792004],
    [0.00000011819, 1.92035726047, 934.9485149682],
    [0.00000013966, 2.79874125511, 760.25553592],
    [0.00000010492, 5.1923580301, 3053.7123753466],
    [0.00000009547, 4.33382538314, 3480.3105662226],
    [0.00000009018, 0.18781617182, 1781.0313497194],
    [0.00000011262, 0.70413700207, 2118.7638603784],
    [0.00000011533, 0.17501708187, 21.3406410024],
    [0.00000010381, 2.34569194101, 99.1606209555],
    [0.00000009749, 4.25601352865, 3274.1250177854],
    [0.00000009853, 4.76873548609, 114.1384744825],
    [0.00000010978, 1.22560894011, 35.4247226521],
    [0.00000008289, 4.97156174435, 6681.2248533996],
    [0.00000010112, 5.34822092342, 92.0470739547],
    [0.00000010037, 4.4454197684, 909.8187330546],
    [0.00000007349, 6.13248290384, 2840.4132799086],
    [0.00000008536, 5.21282368896, 224.3447957019],
    [0.00000007593, 1.62305052516, 1251.3403846248],
    [0.00000009259, 0.20089133693, 107.0249274817],
    [0.00000006653, 2.48528584036, 20426.571092422],
    [0.00000007688, 3.67187104557, 6812.766815086],
    [0.00000006623, 5.7565480447, 1994.3304451574],
    [0.00000007548, 5.09805153926, 10742.9765113056],
    [0.00000006376, 4.34378450086, 3583.4033404412],
    [0.00000007114, 5.3436043317, 227.5261894396],
    [0.00000005702, 4.96221764636, 3370.1042450032],
    [0.00000005591, 5.07645397193, 2.4476805548],
    [0.00000006993, 2.68043166203, 3693.6096616606],
    [0.00000007343, 5.74195879099, 1364.7280995819],
    [0.000000053, 6.22025298946, 2097.423219376],
    [0.00000007366, 5.69014982041, 944.9828232758],
    [0.00000006227, 2.09636133464, 11506.7697697936],
    [0.00000006123, 1.54269795254, 51116.4243529592],
    [0.00000007191, 0.30942664192, 1289.9465010146],
    [0.00000006764, 1.31880163193, 2221.856634597],
    [0.00000005314, 4.07791329809, 3796.7024358792],
    [0.00000006691, 0.48394707891, 2435.155730035],
    [0.00000005678, 3.99650722529, 3590.516887442],
    [0.00000006913, 2.17209448139, 1512.8068240082],
    [0.00000006863, 2.6606218522, 39.3568759152],
    [0.00000004663, 1.44210376453, 217.2312487011],
    [0.00000005202, 6.22289910597, 10.2949407385],
    [0.00000004918, 1.32909293238, 1567.7322542814],
    [0.00000004905, 1.76685242036, 18.1592472647],
    [0.00000004309, 5.85024852074, 3156.8051495652],
    [0.00000004211, 5.01313848217, 70.8494453042],
    [0.00000005062, 0.80994865388, 2538.2485042536],
    [0.00000004123, 0.92879524953, 99.9113804809],
    [0.00000005689, 3.24589939686, 1894.4190646765],
    [0.00000005405, 3.10881346274, 142.4496501338],
    [0.00000004134, 2.64708678138, 78263.70942472259],
    [0.00000004948, 5.98641212005, 173.9422195228],
    [0.00000003628, 5.69964665573, 2310.722314814],
    [0.00000003599, 1.71684207078, 191.9584544356],
    [0.00000003474, 4.15884752856, 3899.7952100978],
    [0.00000003728, 0.38915791235, 2854.6403739102],
    [0.00000004555, 2.18161599519, 106.2741679563],
    [0.00000004248, 4.85545376639, 378.6432952517],
    [0.00000003219, 5.17876352265, 647.0108333148],
    [0.00000004156, 5.83087740379, 381.6122406683],
    [0.00000003089, 5.9797203479, 2413.8150890326],
    [0.0000000311, 4.74154204809, 3686.4961146598],
    [0.00000004126, 0.230244653, 2751.5475996916],
    [0.00000004186, 4.53063268199, 604.4725636619],
    [0.00000003214, 0.62841923801, 5621.8429232104],
    [0.00000003173, 1.03970850093, 1884.124123938],
    [0.00000003631, 6.11483162104, 1751.539531416],
    [0.00000003244, 3.73755563163, 3906.9087570986],
    [0.00000002934, 3.82711926045, 4113.0943055358],
    [0.00000003385, 2.45097161569, 4010.0015313172],
    [0.00000002733, 1.10894666794, 124.433415221],
    [0.00000002797, 4.1801642543, 750.1036075334],
    [0.00000003278, 3.89534608236, 2810.9214616052],
    [0.00000003519, 3.46310988284, 88.865680217],
    [0.00000002514, 5.57614146474, 3473.1970192218],
    [0.00000002478, 2.71540068658, 121.2520214833],
    [0.00000003368, 4.20480679324, 1215.1649024473],
    [0.0000000265, 0.02546010919, 3171.0322435668],
    [0.00000002501, 2.99841933426, 415.5524906121],
    [0.00000002307, 4.43561436022, 19367.1891622328],
    [0.00000003026, 0.4263698283, 685.4739373527],
    [0.00000002867, 2.10771640396, 25558.2121764796],
    [0.00000002321, 3.76499649711, 5.6290742925],
    [0.00000002854, 2.94562717711, 155.7829722581],
    [0.00000002166, 1.46249226436, 210.1177017003],
    [0.00000002285, 5.35178888099, 32.2433289144],
    [0.0000000216, 1.44708332454, 4164.311989613],
    [0.00000002886, 3.59088244376, 984.6003316219],
    [0.00000002102, 2.9059096645, 67.6680515665],
    [0.00000002279, 4.42704503838, 24498.8302462904],
    [0.00000002135, 4.35361685772, 430.5303441391],
    [0.00000002094, 5.66114013915, 2627.1141844706],
    [0.00000002595, 0.84981101533, 1819.6374661092],
    [0.00000001909, 3.97032006528, 4216.1870797544],
    [0.00000002494, 4.78788182782, 983.1158589136],
    [0.00000002029, 0.75564793063, 2200.5159935946],
    [0.00000002273, 1.99546942629, 5230.807466803],
    [0.00000001999, 4.12491132002, 4.665866446],
    [0.00000002258, 5.38181513609, 5216.5803728014],
    [0.00000001824, 0.0668312458, 195.1398481733],
    [0.00000001787, 5.75048565488, 2730.2069586892],
    [0.00000001802, 1.44646003868, 508.3503240922],
    [0.00000001865, 5.63039578107, 24.3790223882],
    [0.00000001848, 2.85100590435, 8094.5216858326],
    [0.00000002331, 0.05644450768, 423.4167971383],
    [0.00000002426, 0.01847558338, 3067.9394693482],
    [0.00000001888, 4.99494383624, 543.9180590962],
    [0.00000001815, 5.97801208587, 3487.4241132234],
    [0.00000002196, 4.26579732079, 202.2533951741],
    [0.00000001703, 4.52949779635, 4002.8879843164],
    [0.00000002034, 3.41844460367, 9161.0171630226],
    [0.00000001825, 3.47943965919, 4223.3006267552],
    [0.00000002018, 0.52162735128, 9146.790069021],
    [0.00000001616, 1.24238250675, 533.6231183577],
    [0.00000002142, 5.06403880136, 408.4389436113],
    [0.00000001907, 2.2324373809, 1969.2006632438],
    [0.00000001867, 3.82608904007, 63.7358983034],
    [0.00000001608, 3.58133670695, 4429.4861751924],
    [0.00000002062, 1.98510238807, 2015.6710861598],
    [0.00000001477, 1.00407898587, 415.2918581812],
    [0.00000001459, 5.30979700605, 3789.5888888784],
    [0.00000001474, 5.88679936711, 0.9632078465],
    [0.00000001671, 1.64068874587, 5.4166259714],
    [0.00000001621, 2.2318223992, 4326.3934009738],
    [0.00000001841, 1.74692094987, 2332.0629558164],
    [0.00000001835, 2.20272498526, 1699.2792165032],
    [0.00000001491, 0.45972071827, 10977.078804699],
    [0.00000001844, 2.8137541793, 28.3111756513],
    [0.0000000137, 5.04593565838, 454.9093665273],
    [0.00000001392, 4.59344774851, 77204.32749453338],
    [0.00000001699, 2.48359254577, 303.8616966844],
    [0.00000001372, 0.67837654025, 46.470422916],
    [0.00000001267, 0.05639327995, 9.5612275556],
    [0.00000001284, 0.47741929187, 2516.9078632512],
    [0.00000001254, 1.29466765583, 33.9402499438],
    [0.00000001186, 4.15626908471, 245.5424243524],
    [0.0000000118, 1.18713283163, 824.7421937488],
    [0.00000001439, 2.95146332663, 458.8415197904],
    [0.00000001204, 5.66792834962, 3803.81598288],
    [0.00000001153, 3.72544799754, 1066.49547719],
    [0.00000001422, 2.58497362215, 320.3240229197],
    [0.00000001444, 1.50514316454, 2648.454825473],
    [0.00000001414, 6.10526805877, 3384.3313390048],
    [0.00000001211, 2.85385408616, 731.9443602687],
    [0.00000001064, 0.6575030135, 416.3032501375],
    [0.00000001204, 0.92728020431, 113.3877149571],
    [0.00000001055, 3.77725844044, 4532.578949411],
    [0.00000001274, 5.61317469562, 2943.5060541272],
    [0.00000001028, 5.53301037564, 3046.5988283458],
    [0.0000000099, 4.8820167245, 1382.8873468466],
    [0.00000000997, 5.69806924537, 104351.61256629678],
    [0.00000001011, 2.65458965691, 31.019488637],
    [0.00000001322, 4.67575000222, 2349.3284312038],
    [0.00000001303, 1.65164940141, 280.9671470045],
    [0.00000001291, 1.73989030217, 1744.8558675419],
    [0.00000000937, 4.32454796443, 4319.279853973],
    [0.00000001012, 3.22243984495, 4539.6924964118],
    [0.00000001159, 2.6640406068, 295.0512286542],
    [0.00000001141, 6.11848453106, 739.8086667949],
    [0.00000001246, 1.43930969611, 72.0732855816],
    [0.00000001068, 2.53948941089, 69.1525242748],
    [0.00000000884, 1.28389035345, 526.5095713569],
    [0.00000001193, 6.14090294849, 312.4597163935],
    [0.00000000869, 5.30956828211, 10021.8372800994],
    [0.00000001066, 1.83967628183, 151.0476698429],
    [0.00000000843, 5.05045373887, 4105.980758535],
    [0.00000000988, 3.95865020631, 209.3669421749],
    [0.0000000105, 1.26549223119, 2964.8466951296],
    [0.00000000876, 3.34103711497, 4745.878044849],
    [0.00000001055, 1.24157706537, 166.828672522],
    [0.00000001126, 3.7530154021, 2004.364753465],
    [0.00000000892, 1.92561240876, 203.0041546995],
    [0.00000000784, 2.56106804097, 422.6660376129],
    [0.00000000806, 0.52253398247, 100.6450936638],
    [0.00000000784, 0.92107034111, 1141.1340634054],
    [0.00000000856, 4.10909777435, 746.9222137957],
    [0.00000001015, 0.24600325202, 306.830642101],
    [0.00000000939, 4.5031052042, 6.2197751235],
    [0.00000000776, 5.37104788295, 4120.2078525366],
    [0.00000000804, 0.20540344003, 2833.2997329078],
    [0.00000000999, 0.94816416877, 836.5216071956],
    [0.00000000976, 4.77648030546, 724.8308132679],
    [0.00000000725, 0.96500014068, 850.0149880143],
    [0.00000000958, 4.98731556305, 73.297125859],
    [0.0000000074, 5.91873149414, 387.2413149608],
    [0.00000000805, 2.66483653019, 355.7487455718],
    [0.00000000974, 0.98246350302, 1436.5407527326],
    [0.0000000091, 6.25657833975, 833.552661779],
    [0.00000000823, 5.92328046482, 3700.7232086614],
    [0.00000000833, 3.90558532637, 373.0142209592],
    [0.00000000684, 6.04392151168, 511.5317178299],
    [0.00000000767, 2.02591601568, 4642.7852706304],
    [0.0000000088, 1.82803044829, 1140.38330388],
    [0.00000000733, 2.09080805225, 636.7158925763],
    [0.00000000656, 5.43355060466, 12036.4607348882],
    [0.00000000828, 1.41923009106, 299.1263942692],
    [0.00000000846, 5.61400936349, 1670.0742689746],
    [0.00000000697, 4.16436134036, 518.6452648307],
    [0.00000000636, 3.80940348724, 327.4375699205],
    [0.00000000712, 0.06708196045, 26617.5941066688],
    [0.00000000804, 2.25376488781, 2274.5468326365],
    [0.00000000711, 2.71829552439, 1048.3362299253],
    [0.00000000805, 5.53457869151, 3259.8979237838],
    [0.00000000732, 1.00610462425, 3281.2385647862],
    [0.00000000588, 5.32754661703, 3362.9906980024],
    [0.00000000585, 3.58063716879, 4848.9708190676],
    [0.0000000057, 5.56036515417, 491.5579294568],
    [0.00000000759, 2.05710357055, 451.9404211107],
    [0.000000006, 5.57865141384, 827.9235874865],
    [0.00000000583, 3.88352779537, 81.7521332162],
    [0.00000000644, 2.72366307602, 775.233389447],
    [0.00000000644, 3.65015968478, 2424.1100297711],
    [0.00000000671, 2.3792948442, 611.4430983108],
    [0.00000000534, 0.4123766885, 103.1409583284],
    [0.00000000623, 1.8680761735, 3870.3033917944],
    [0.00000000719, 2.99695058393, 105.5404547734],
    [0.000000006, 2.48701426674, 5092.1519581158],
    [0.00000000521, 0.40778111216, 732.6951197941],
    [0.00000000518, 4.12610245687, 4635.6717236296],
    [0.00000000528, 3.5154593704, 103.0445901088],
    [0.00000000654, 0.58211671438, 81.0013736908],
    [0.00000000582, 3.83338207163, 104.0559820651],
    [0.00000000522, 0.58087298776, 148.0787244263],
    [0.00000000515, 0.67354002878, 1457.525933062],
    [0.00000000555, 2.96733130023, 4856.0843660684],
    [0.00000000592, 0.08564662201, 102.1295663721],
    [0.00000000498, 6.19309208823, 248.7238180901],
    [0.00000000489, 1.00239631558, 842.9014410135],
    [0.00000000591, 5.89125682942, 1056.2005364515],
    [0.00000000485, 4.79860041466, 4422.3726281916],
    [0.00000000483, 0.53395176641, 112.6540017742],
    [0.00000000485, 4.16027461961, 860.3099287528],
    [0.00000000489, 5.08318816598, 4436.5997221932],
    [0.00000000498, 6.22262217585, 3149.6916025644],
    [0.00000000613, 4.18186321315, 232.0490435337],
    [0.00000000453, 3.90192544464, 561.934294009],
    [0.00000000577, 5.15736245311, 51646.11531805379],
    [0.00000000444, 2.48701681469, 739.0579072695],
    [0.0000000054, 1.23180065565, 298.2326223919],
    [0.00000000545, 3.60926611621, 78.7137518304],
    [0.00000000475, 3.10611011445, 5062.2699145056],
    [0.00000000516, 5.42218263189, 3576.2897934404],
    [0.00000000449, 1.18895847333, 50586.73338786459],
    [0.0000000048, 5.75337600258, 4017.115078318],
    [0.0000000047, 4.62331143073, 440.8252848776],
    [0.00000000489, 2.53240222619, 2042.4977891028],
    [0.00000000539, 4.33939298665, 610.6923387854],
    [0.00000000442, 2.51635470354, 672.1406152284],
    [0.00000000541, 1.73551162331, 405.2575498736],
    [0.00000000419, 3.55825295417, 93.531546663],
    [0.00000000453, 3.32938904455, 18837.49819713819],
    [0.0000000043, 4.32616578124, 525.7588118315],
    [0.00000000401, 5.17491727488, 628.8515860501],
    [0.00000000448, 5.96827064986, 1474.6737883704],
    [0.00000000487, 0.76208939819, 3597.6304344428],
    [0.00000000392, 1.44107093084, 953.1077622329],
    [0.00000000467, 3.50646897376, 1151.4290041439],
    [0.0000000041, 3.76250630862, 1063.3140834523],
    [0.00000000414, 1.72229833074, 241.6102710893],
    [0.00000000381, 5.99607781498, 960.2213092337],
    [0.00000000494, 1.40530043178, 597.3590166611],
    [0.00000000465, 2.09234485063, 927.8349679674],
    [0.00000000498, 4.50123110984, 1041.2226829245],
    [0.00000000365, 1.55571340645, 1354.4331588434],
    [0.00000000396, 1.48969431956, 1038.0412891868],
    [0.00000000457, 0.11580565323, 229.0800981171],
    [0.00000000369, 1.23618361129, 277.0349937414],
    [0.00000000362, 2.62594348412, 384.0599212231],
    [0.00000000419, 1.24807803275, 1514.2912967165],
    [0.00000000459, 0.50225890493, 679.2541622292],
    [0.00000000341, 0.90339267043, 8962.4553499102],
    [0.00000000441, 0.13473425717, 114.3991069134],
    [0.00000000465, 2.69532915374, 313.2104759189],
    [0.00000000376, 5.69753703428, 1221.8485663214],
    [0.00000000464, 3.76253997519, 1021.2488945514],
    [0.00000000469, 1.38083260272, 721.6494195302],
    [0.00000000335, 1.36100708895, 103292.23063610759],
    [0.00000000335, 1.49227866477, 1670.8250285],
    [0.00000000417, 0.92560155806, 483.2205421786],
    [0.00000000359, 1.83758447058, 4959.177140287],
    [0.00000000342, 5.16720418574, 1912.5783119412],
    [0.00000000336, 5.13440853214, 3679.382567659],
    [0.00000000369, 1.65937524395, 519.3960243561],
    [0.00000000384, 5.58846762478, 490.3340891794],
    [0.00000000417, 3.8836580193, 758.7710632117],
    [0.0000000033, 0.43723542896, 1773.9178027186],
    [0.00000000323, 5.54461981858, 1596.1864422846],
    [0.00000000325, 3.37966598429, 5165.3626887242],
    [0.00000000355, 6.08798199137, 10447.3878396044],
    [0.00000000326, 0.0964926611, 18849.2275499742],
    [0.00000000358, 4.56833529869, 77.7505439839],
    [0.00000000332, 5.27815184398, 3892.681663097],
    [0.00000000302, 4.80186092232, 4752.9915918498],
    [0.0000000029, 5.67946565436, 1276.6131788903],
    [0.00000000288, 3.93217187745, 4952.0635932862],
    [0.00000000329, 2.50160322764, 1091.6252591036],
    [0.00000000306, 5.96212024496, 3466.083472221],
    [0.00000000281, 0.1737905216, 1049.0869894507],
    [0.00000000288, 1.34261209442, 1987.2168981566],
    [0.00000000278, 4.55309532391, 4738.7644978482],
    [0.000000003, 2.7134608367, 5172.476235725],
    [0.00000000299, 2.11204162418, 269.9214467406],
    [0.00000000305, 5.85028190555, 1166.4068576709],
    [0.00000000299, 0.20515857237, 1159.2933106701],
    [0.00000000276, 2.57563382311, 4701.1165017084],
    [0.00000000315, 5.67633875619, 1372.5924061081],
    [0.00000000337, 1.91686592954, 1158.5425511447],
    [0.0000000033, 1.80789062049, 1244.226837624],
    [0.00000000331, 3.19227327235, 1467.8208738005],
    [0.00000000282, 5.58944365259, 4333.5069479746],
    [0.00000000315, 0.5210566676, 3914.0223040994],
    [0.00000000349, 3.88969707596, 1440.9941708575],
    [0.00000000348, 0.07207894792, 247.2393453818],
    [0.00000000258, 3.51418491501, 5746.271337896],
    [0.00000000344, 2.91578488326, 1438.0252254409],
    [0.00000000255, 2.95276002628, 842.1506814881],
    [0.00000000263, 2.35269374608, 988.532484885],
    [0.00000000253, 1.63742996068, 19896.8801273274],
    [0.00000000248, 2.46578878638, 130439.51570787099],
    [0.00000000318, 2.70356364426, 39.6175083461],
    [0.00000000249, 0.91080970996, 1269.4996318895],
    [0.00000000344, 1.44221528499, 244.318584075],
    [0.00000000253, 4.80540322751, 102.5715093568],
    [0.00000000239, 2.26921713497, 1055.4497769261],
    [0.00000000319, 6.1531018685, 319.5732633943],
    [0.00000000237, 4.93685019276, 9676.4810341156],
    [0.00000000321, 6.13235058683, 337.732510659],
    [0.00000000241, 3.99634322156, 8631.326197928],
    [0.00000000252, 5.24775605546, 145.6310438715],
    [0.00000000239, 3.00272931455, 56.6223513026],
    [0.00000000232, 3.61635757009, 878.3261636656],
    [0.00000000243, 2.19014037177, 59.8037450403],
    [0.00000000302, 6.10817646642, 2804.2377977311],
    [0.00000000256, 2.87693277369, 5378.6617841622],
    [0.00000000243, 5.04541081925, 4686.8894077068],
    [0.00000000305, 2.71903955995, 4590.910180489],
    [0.00000000303, 2.33379079588, 1291.4309737229],
    [0.00000000279, 3.98464205757, 5326.7866940208],
    [0.00000000234, 1.14750351172, 2303.6087678132],
    [0.00000000222, 4.03953577726, 134.5853436076],
    [0.00000000274, 2.26494414434, 629.6023455755],
    [0.00000000233, 3.89299806486, 170.7608257851],
    [0.00000000216, 4.49567498795, 391.1734682239],
    [0.00000000235, 3.75421202808, 284.1485407422],
    [0.00000000244, 5.30559419162, 103.6140390804],
    [0.00000000213, 5.15481040823, 1482.7987273275],
    [0.00000000291, 1.70882423174, 36.6485629295],
    [0.00000000248, 4.95589340318, 108.7218485111],
    [0.00000000219, 5.20316396963, 234.6397364404],
    [0.0000000028, 4.13938404061, 8521.1198767086],
    [0.00000000211, 5.43938581987, 1144.3154571431],
    [0.0000000021, 5.42681339323, 144.1465711632],
    [0.00000000266, 3.2321471262, 1595.2926704073],
    [0.00000000204, 2.51464766387, 906.849787638],
    [0.00000000212, 5.11030568275, 4209.0735327536],
    [0.00000000207, 0.21830109009, 2090.3096723752],
    [0.0000000021, 5.04534144928, 348.635198571],
    [0.00000000271, 1.54491749029, 1474.9344208013],
    [0.00000000212, 0.18035346523, 8617.0991039264],
    [0.00000000262, 4.23663896945, 1357.6145525811],
    [0.00000000197, 6.17776908221, 1279.794572628],
    [0.0000000024, 5.38841905316, 9256.9963902404],
    [0.00000000268, 1.1464480544, 621.7380390493],
    [0.00000000254, 1.66705612984, 437.6438911399],
    [0.00000000203, 4.36111777664, 6151.533888305],
    [0.00000000195, 2.78131316925, 97.6761482472],
    [0.00000000233, 1.52800232036, 1560.6187072806],
    [0.00000000191, 5.00080577969, 27147.28507176339],
    [0.00000000192, 5.33525732917, 1593.0050485469],
    [0.00000000241, 1.17122832242, 913.7508863177],
    [0.00000000194, 3.38854851082, 1379.7059531089],
    [0.0000000021, 1.38453748076, 835.7878940127],
    [0.00000000222, 3.44705743328, 5120.6011455836],
    [0.00000000192, 4.82529494314, 11272.6674764002],
    [0.00000000192, 4.95353570489, 3995.7744373156],
    [0.00000000198, 5.4317888065, 107.7586406646],
    [0.00000000204, 3.99541014021, 1809.4855377226],
    [0.00000000183, 4.52627757832, 5069.3834615064],
    [0.00000000178, 5.99034838288, 252.6559713532],
    [0.00000000225, 5.58645421882, 369.0820676961],
    [0.00000000177, 3.72669864409, 757.2171545342],
    [0.00000000228, 0.7000201888, 799.6124118352],
    [0.00000000216, 2.90713974117, 1173.5204046717],
    [0.00000000236, 3.66169805038, 2729.4561991638],
    [0.00000000174, 6.06731227459, 237.6781178262],
    [0.00000000188, 3.77679007488, 2545.3620512544],
    [0.00000000242, 4.71277068948, 5856.4776591154],
    [0.00000000228, 1.47458508276, 885.4397106664],
    [0.00000000211, 4.24524804787, 446.3113468182],
    [0.00000000205, 0.55217035088, 417.0369633204],
    [0.00000000181, 3.17689745452, 5481.7545583808],
    [0.00000000186, 5.70925046355, 3782.4753418776],
    [0.00000000199, 0.28506715061, 4230.414173756],
    [0.00000000217, 2.89086013088, 1784.2127434571],
    [0.00000000172, 2.34596804787, 700.4517908797],
    [0.00000000236, 5.52508991559, 908.3342603463],
    [0.00000000204, 1.98081288286, 1432.3961511484],
    [0.00000000181, 0.92868854631, 2620.0006374698],
    [0.0000000017, 3.30138322296, 2861.753920911],
    [0.0000000017, 3.71564088414, 172.2452984934],
    [0.00000000174, 1.68959143814, 945.9942152321],
    [0.000000002, 5.0650681678, 2879.0193962984],
    [0.00000000207, 6.17620000717, 377.1588225434],
    [0.00000000208, 3.20860421477, 2199.7652340692],
    [0.00000000199, 3.56155325197, 2274.1169495098],
    [0.00000000167, 5.42865908404, 4649.8988176312],
    [0.00000000196, 4.87037883591, 9050.8108418032],
    [0.00000000198, 0.16471564201, 2288.3440435114],
    [0.00000000185, 2.89826579758, 306.0969289181],
    [0.00000000162, 2.17158710985, 1304.9243545416],
    [0.00000000178, 5.48660214424, 1688.9842757647],
    [0.0000000019, 6.06501086472, 1475.6851803267],
    [0.00000000198, 0.85822049397, 460.5384408198],
    [0.00000000197, 4.8612090882, 1446.62324515],
    [0.00000000159, 4.31495740059, 5055.1563675048],
    [0.00000000166, 1.67252733207, 5275.5690099436],
    [0.00000000161, 3.74092585348, 5268.4554629428],
    [0.0000000016, 3.62028653475, 292.0128472684],
    [0.00000000157, 1.72177932196, 111.1695290659],
    [0.00000000189, 1.37564836389, 334.5511169213],
    [0.00000000177, 2.28594111411, 1408.0171287602],
    [0.00000000209, 4.3680641289, 2228.9701815978],
    [0.00000000209, 1.39240651121, 1288.4620283063],
    [0.00000000154, 6.23394400917, 1365.4788591073],
    [0.00000000192, 0.16212770341, 222.8603229936],
    [0.00000000179, 3.75828309053, 2125.8774073792],
    [0.000000002, 1.81807108043, 157.2674449664],
    [0.00000000211, 1.84134248365, 558.0021407459],
    [0.00000000211, 1.27402113105, 16730.4636895958],
    [0.00000000199, 0.54885508254, 1363.2436268736],
    [0.00000000163, 0.44214863546, 1585.8915015461],
    [0.00000000152, 4.04310247668, 208.633228992],
    [0.00000000211, 0.74499125796, 2124.9836355019],
    [0.0000000017, 4.2493445264, 1493.093668066],
    [0.0000000017, 2.49593549132, 1489.9122743283],
    [0.00000000162, 0.7526754485, 614.6244920485],
    [0.00000000165, 4.27638745216, 109.2431133729],
    [0.00000000161, 2.4620119198, 5488.8681053816],
    [0.00000000154, 3.47162196723, 64.9597385808],
    [0.00000000183, 2.21304397103, 1681.1199692385],
    [0.00000000145, 1.13043225685, 3634.6210245184],
    [0.0000000019, 4.22359633252, 225.8292684102],
    [0.00000000146, 2.91892799786, 3178.1457905676],
    [0.0000000015, 1.96023730174, 203.7378678824],
    [0.0000000015, 4.08015161423, 23969.1392811958],
    [0.00000000191, 2.75494620701, 421.93232443],
    [0.00000000145, 4.67237300699, 1799.1905969841],
    [0.000000002, 6.14935600368, 9786.687355335],
    [0.00000000159, 4.09711049807, 98.8999885246],
    [0.00000000193, 0.94928637472, 351.8165923087],
    [0.00000000142, 5.07886703815, 181.806526049],
    [0.0000000014, 3.81296616789, 162.8965192589],
    [0.00000000162, 4.31009062402, 945.2434557067],
    [0.00000000179, 5.73753430583, 1065.6017053127],
    [0.00000000143, 5.91440700739, 100.1720129118],
    [0.00000000176, 1.26093893532, 1201.831580323],
    [0.00000000188, 2.55740768277, 344.7030453079],
    [0.0000000014, 4.52907970087, 4804.209275927],
    [0.00000000138, 0.16878613931, 419.532827985],
    [0.00000000164, 1.85838560787, 282.4516197128],
    [0.00000000138, 3.25544421696, 419.4364597654],
    [0.0000000017, 0.20539303262, 911.3032057629],
    [0.00000000182, 5.01287906304, 456.3938392356],
    [0.00000000186, 1.23407382137, 1791.3262904579],
    [0.00000000142, 4.60512287907, 110.2545053292],
    [0.00000000144, 1.84181606013, 586.3133163972],
    [0.00000000162, 1.24971065328, 1877.0105769372],
    [0.00000000174, 2.53542042677, 385.5443939314],
    [0.00000000181, 5.33432353548, 2495.9226829218],
    [0.00000000151, 3.58321223305, 420.4478517217],
    [0.00000000134, 4.92449036148, 4525.4654024102],
    [0.00000000129, 5.27976783987, 153.4953503977],
    [0.00000000135, 0.4202531823, 938.1299087059],
    [0.00000000135, 3.63056528856, 13095.8426650774],
    [0.00000000158, 1.76113078448, 25021.4076643842],
    [0.00000000151, 6.11655316711, 418.5214360287],
    [0.00000000158, 4.64747845264, 25035.6347583858],
    [0.00000000129, 3.33810087063, 1194.7180333222],
    [0.00000000175, 2.09143286775, 7903.073419721],
    [0.00000000126, 4.98103548714, 567.8240007324],
    [0.00000000151, 5.36052429428, 806.725958836],
    [0.00000000124, 2.86207847538, 5643.1785636774],
    [0.00000000124, 1.23942435281, 1262.3860848887],
    [0.00000000135, 0.69445916838, 2936.3925071264],
    [0.00000000121, 2.50408665478, 7564.830720738],
    [0.00000000123, 5.95230221642, 8734.4189721466],
    [0.00000000122, 2.06726569034, 1371.8416465827],
    [0.00000000124, 5.12641967457, 1460.7073267997],
    [0.00000000122, 3.9647481469, 7342.4577801806],
    [0.00000000137, 2.65264715747, 5695.0536538188],
    [0.00000000127, 0.01572930143, 2406.7015420318],
    [0.00000000139, 3.54731067233, 1261.6353253633],
    [0.00000000165, 0.11681965791, 90.5626012464],
    [0.00000000118, 1.02879687025, 1165.6560981455],
    [0.00000000141, 4.61897843369, 207.6700211455],
    [0.00000000132, 1.92496506388, 77734.01845962799],
    [0.00000000117, 2.57928479256, 3494.5376602242],
    [0.00000000139, 4.42153900067, 383.0967133766],
    [0.00000000124, 2.61549719747, 2498.8916283384],
    [0.00000000128, 3.54521875299, 398.1440028728],
    [0.00000000163, 0.73122953088, 5650.2921106782],
    [0.00000000114, 3.04609349768, 4562.4609930212],
    [0.00000000119, 4.99250283927, 1909.3969182035],
    [0.00000000113, 5.01858725872, 77.962992305],
    [0.00000000113, 1.73479066, 216.4804891757],
    [0.00000000137, 3.55149342141, 2442.2692770358],
    [0.00000000158, 2.15595710448, 9580.5018068978],
    [0.00000000126, 1.08246494677, 1152.1797636693],
    [0.00000000114, 4.28509194878, 9573.388259897],
    [0.00000000127, 3.50108752801, 131.4039498699],
    [0.00000000142, 4.05726132248, 416.7763308895],
    [0.0000000012, 4.90545174186, 207.1487562837],
    [0.00000000111, 0.5421839499, 218.7157214094],
    [0.00000000121, 3.86241821639, 703.6331846174],
    [0.00000000119, 2.14168944514, 1806.3041439849],
    [0.00000000151, 5.55683538296, 4907.3020501456],
    [0.00000000141, 3.99143264269, 1674.0064222377],
    [0.00000000136, 1.54720293989, 138.5174968707],
    [0.00000000123, 0.05470509982, 4546.8060434126],
    [0.00000000129, 3.67141120495, 115.6229471908],
    [0.00000000107, 3.2025483093, 102.3420146932],
    [0.00000000115, 3.10344883701, 1578.0271950199],
    [0.00000000109, 4.25345459472, 5385.775331163],
    [0.00000000106, 0.63453414225, 103.843533744],
    [0.0000000014, 5.28188912145, 1895.9035373848],
    [0.00000000146, 3.11319020387, 52705.49724824299],
    [0.00000000145, 1.61439606529, 179.3588454942],
    [0.00000000135, 2.59335375358, 2100.6046131137],
    [0.00000000126, 5.61880333992, 88.1149206916],
    [0.00000000108, 4.50126893539, 643.8294395771],
    [0.00000000143, 1.39921260141, 110.1581371096],
    [0.00000000132, 3.31896348472, 215.7467759928],
    [0.00000000102, 1.09587270557, 205.2223405907],
    [0.00000000141, 2.56208018133, 1928.0986821894],
    [0.00000000102, 4.24160685473, 76674.63652943878],
    [0.00000000125, 0.94823921915, 1230.1427559743],
    [0.00000000112, 5.46215941699, 4098.8672115342],
    [0.000000001, 1.97332490568, 1621.3162241982],
    [0.000000001, 5.26909092042, 4966.2906872878],
    [0.00000000107, 4.56608538248, 206.1373643274],
    [0.0000000011, 4.78553947193, 4312.1663069722],
    [0.00000000098, 5.21521777943, 465.9550667912],
    [0.00000000118, 1.04313921936, 1518.2234499796],
    [0.00000000105, 6.23894659009, 429.0458714308],
    [0.00000000125, 5.2868800163, 1213.680429739],
    [0.00000000133, 0.69664013472, 8837.5117463652],
    [0.000000001, 4.72480009994, 665.0270682276],
    [0.00000000132, 0.48447864119, 1116.0042814918],
    [0.0000000013, 3.79237448581, 106.0135355254],
    [0.000000001, 5.31366314411, 2005.3761454213],
    [0.00000000107, 0.02978087425, 1902.2833712027],
    [0.00000000128, 0.2095631091, 127.4717966068],
    [0.00000000118, 5.70922471787, 1792.0770499833],
    [0.00000000093, 0.74663067929, 1482.0479678021],
    [0.00000000095, 2.07102351007, 1016.8436605363],
    [0.000000001, 2.97099496682, 5798.1464280374],
    [0.00000000115, 1.5093226279, 683.9894646444],
    [0.00000000098, 0.45715211253, 931.0163617051],
    [0.00000000106, 4.10938382486, 2534.0557185596],
    [0.00000000111, 0.97564973712, 2193.4024465938],
    [0.00000000125, 3.25888934908, 9470.2954856784],
    [0.00000000092, 0.14995833602, 285.3723810196],
    [0.00000000092, 2.42192234868, 347.4113582936],
    [0.00000000091, 3.24243732707, 409.9234163196],
    [0.0000000009, 4.0837236351, 5371.5482371614],
    [0.00000000089, 2.26526594442, 3810.9295298808],
    [0.00000000092, 4.29940061939, 2115.5824666407],
    [0.00000000122, 4.3378017771, 1892.9345919682],
    [0.00000000097, 2.07654896339, 1724.4089984168],
    [0.00000000095, 5.6078473658, 767.3690829208],
    [0.00000000105, 5.03647964451, 569.0478410098],
    [0.00000000121, 1.19297867642, 560.7104537316],
    [0.00000000122, 1.83762555915, 5540.0857894588],
    [0.00000000117, 3.62889242385, 943.4983505675],
    [0.00000000087, 0.84466626541, 1578.7779545453],
    [0.00000000091, 3.55214891567, 5584.8473325994],
    [0.00000000108, 4.03716486871, 154.2984995498],
    [0.00000000089, 6.10524797291, 429.7795846137],
    [0.00000000119, 1.56903860849, 874.3940104025],
    [0.00000000096, 5.64761669214, 13362.4497067992],
    [0.00000000096, 0.44990066057, 3252.784376783],
    [0.00000000086, 5.95598449699, 1254.5217783625],
    [0.00000000085, 6.02330401249, 1681.8707287639],
    [0.00000000092, 1.19241683037, 1966.2317178272],
    [0.00000000096, 5.94588689333, 326.6868103951],
    [0.00000000118, 0.95234469039, 2107.7181601145],
    [0.0000000009, 1.95604927131, 1688.2335162393],
    [0.00000000104, 3.30117103888, 2758.6611466924],
    [0.00000000086, 0.7306814085, 916.9322800554],
    [0.00000000112, 4.59968883992, 946.4672959841],
    [0.00000000083, 4.4117533371, 129380.13377768178],
    [0.00000000091, 2.72800713885, 18307.8072320436],
    [0.00000000084, 4.72714820022, 4841.8572720668],
    [0.00000000094, 2.63287923471, 622.4887985747],
    [0.00000000113, 5.66293325737, 602.9880909536],
    [0.00000000111, 3.57214372968, 540.7366653585],
    [0.00000000102, 4.47121730988, 119.767548775],
    [0.00000000085, 2.21390290589, 5805.2599750382],
    [0.00000000086, 1.60623796261, 902.7051860538],
    [0.0000000008, 1.83164067069, 17789.845619785],
    [0.00000000086, 4.74492614121, 635.9651330509],
    [0.00000000097, 0.32936503249, 733.428832977],
    [0.00000000103, 5.57515264022, 686.958410061],
    [0.00000000106, 1.44649573653, 206.233732547],
    [0.0000000008, 3.59857902522, 487.1526954417],
    [0.00000000076, 1.54258109866, 5591.9608796002],
    [0.00000000074, 3.45194685408, 608.404716925],
    [0.00000000074, 3.07349489253, 1511.1099029788],
    [0.00000000094, 2.52793777096, 738.3241940866],
    [0.00000000075, 4.27397492841, 1176.7017984094],
    [0.00000000088, 4.45635174775, 771.3012361839],
    [0.00000000077, 1.79780784456, 2122.6960136415],
    [0.00000000096, 2.31115009683, 661.0949149645],
    [0.00000000084, 5.21810779783, 565.1156877467],
    [0.00000000093, 5.26033244294, 85.8272988312],
    [0.00000000071, 2.8735651397, 109.6850563576],
];

const H1: &[Term] = &[
    [0.0021714936, 0.0, 0.0],
    [0.00010164439, 5.05135857516, 7.1135470008],
    [0.00001666197, 6.26691415094, 110.2063212194],
    [0.0000086314, 3.08602730952, 206.1855484372],
    [0.00000473843, 4.91113288503, 14.2270940016],
    [0.00000277992, 2.86432380518, 522.5774180938],
    [0.0000030002, 2.26025751836, 95.9792272178],
    [0.00000290363, 0.17040772597, 103.0927742186],
    [0.00000214696, 4.1113184685, 309.2783226558],
    [0.00000188886, 4.76390777493, 323.5054166574],
    [0.00000130697, 5.89922659791, 117.3198682202],
    [0.00000128487, 2.62303093504, 838.9692877504],
    [0.00000137525, 0.09027153121, 426.598190876],
    [0.00000103661, 3.24116980901, 199.0720014364],
    [0.00000126084, 2.60835819708, 213.299095438],
    [0.00000094521, 3.80080062059, 625.6701923124],
    [0.0000008068, 5.15065147584, 316.3918696566],
    [0.00000075797, 2.00981216338, 412.3710968744],
    [0.00000059537, 2.15421782435, 1155.361157407],
    [0.00000064448, 0.99709825666, 949.1756089698],
    [0.00000049755, 0.43422471991, 742.9900605326],
    [0.00000048325, 3.39994010678, 942.062061969],
    [0.00000042018, 2.97450004091, 515.463871093],
    [0.00000047208, 0.75976281946, 1265.5674786264],
    [0.00000048093, 3.82662335487, 220.4126424388],
    [0.00000040219, 3.88740592263, 639.897286314],
    [0.00000041098, 2.3499499519, 529.6909650946],
    [0.00000036434, 1.79334659506, 728.762966531],
    [0.00000030555, 1.80161261071, 1471.7530270636],
    [0.00000030869, 0.50869243114, 1581.959348283],
    [0.0000002774, 0.38990896723, 632.7837393132],
    [0.00000027419, 3.02175581094, 1258.4539316256],
    [0.0000002591, 0.78125483233, 1059.3819301892],
    [0.00000025787, 4.54819473521, 3.1813937377],
    [0.00000023482, 2.71561718385, 831.8557407496],
    [0.00000026326, 5.16485671039, 419.4846438752],
    [0.00000025601, 4.22210785709, 302.164775655],
    [0.00000023497, 3.52125910995, 536.8045120954],
    [0.00000020003, 5.25607264539, 3.9321532631],
    [0.0000001873, 1.60894425026, 1045.1548361876],
    [0.00000021434, 2.06955000178, 846.0828347512],
    [0.00000019088, 0.25613719518, 1898.3512179396],
    [0.00000016086, 2.65140509727, 1574.8458012822],
    [0.00000016125, 1.47844195975, 1788.1448967202],
    [0.00000018717, 2.62877283733, 1052.2683831884],
    [0.00000014368, 0.4556872132, 1375.7737998458],
    [0.00000013662, 2.42095531745, 1148.2476104062],
    [0.00000017502, 3.05500437003, 735.8765135318],
    [0.00000014925, 2.31987672169, 1368.660252845],
    [0.00000012542, 6.00714543577, 1169.5882514086],
    [0.00000013012, 3.93337468452, 618.5566453116],
    [0.00000011431, 0.00667272245, 2214.7430875962],
    [0.00000013269, 1.72216839452, 1162.4747044078],
    [0.00000009848, 1.46112691127, 1361.5467058442],
    [0.00000009584, 2.2952073791, 1891.2376709388],
    [0.00000012238, 4.6032387844, 330.6189636582],
    [0.00000010423, 5.75335594636, 1485.9801210652],
    [0.00000010883, 1.94703116353, 1685.0521225016],
    [0.00000012244, 4.77070947512, 21.3406410024],
    [0.00000008663, 1.18661907465, 2104.5367663768],
    [0.00000008101, 2.15093470054, 1464.6394800628],
    [0.00000009906, 1.41199969176, 1478.8665740644],
    [0.00000007684, 2.97761213556, 853.196381752],
    [0.00000007153, 4.38528060881, 433.7117378768],
    [0.00000007662, 1.63426478284, 2001.4439921582],
    [0.00000007905, 3.62475499875, 934.9485149682],
    [0.00000007162, 5.49148473639, 1802.3719907218],
    [0.0000000667, 6.04354054907, 2531.1349572528],
    [0.00000007394, 5.52468534091, 1692.1656695024],
    [0.0000000574, 1.95589197227, 2207.6295405954],
    [0.00000005595, 1.35065824436, 1272.6810256272],
    [0.00000005702, 3.63907765105, 227.5261894396],
    [0.00000005317, 1.34697101029, 1677.9385755008],
    [0.00000006806, 1.10596458691, 1795.258443721],
    [0.00000004793, 1.89131744447, 1781.0313497194],
    [0.00000004647, 1.03518697177, 1589.0728952838],
    [0.00000005194, 1.33446511443, 2317.8358618148],
    [0.00000004709, 0.92537186113, 2420.9286360334],
    [0.00000004478, 4.40321019882, 10.2949407385],
    [0.00000005067, 3.32210557643, 1251.3403846248],
    [0.0000000515, 4.9361721519, 2008.557539159],
    [0.0000000452, 2.66794134538, 956.2891559706],
    [0.00000004493, 5.2255773844, 2118.7638603784],
    [0.00000003823, 5.80195878463, 2847.5268269094],
    [0.00000003525, 0.70494113856, 1905.4647649404],
    [0.00000003436, 1.63312223166, 2524.021410252],
    [0.00000004579, 0.81028786487, 2111.6503133776],
    [0.00000003363, 3.41745262261, 191.9584544356],
    [0.00000003476, 4.48427807304, 2324.9494088156],
    [0.00000003418, 1.04468596655, 2634.2277314714],
    [0.00000003165, 1.97619849303, 149.5631971346],
    [0.00000002979, 1.26772675493, 1994.3304451574],
    [0.00000003276, 3.02270292107, 1567.7322542814],
    [0.0000000282, 1.64328510829, 2097.423219376],
    [0.00000002721, 2.71756701106, 99.9113804809],
    [0.00000002587, 0.692555164, 2737.32050569],
    [0.00000002568, 5.69987138123, 124.433415221],
    [0.00000002675, 4.97019432685, 2435.155730035],
    [0.00000002357, 1.51999183594, 99.1606209555],
    [0.00000002879, 5.22699144976, 88.865680217],
    [0.00000002338, 0.1081026912, 2221.856634597],
    [0.00000003012, 0.52256717384, 2428.0421830342],
    [0.0000000222, 4.10112564784, 2641.3412784722],
    [0.0000000216, 5.5655838543, 3163.918696566],
    [0.00000002049, 1.32626480658, 2840.4132799086],
    [0.00000002194, 0.7628364459, 2950.619601128],
    [0.00000002272, 2.07278278469, 107.0249274817],
    [0.00000002518, 0.66310628662, 106.2741679563],
    [0.00000001855, 3.51910580161, 647.0108333148],
    [0.00000002111, 2.72840497751, 1884.124123938],
    [0.00000002107, 6.03362048902, 18.1592472647],
    [0.00000001749, 1.68094831413, 76.2660712756],
    [0.0000000175, 1.20184857797, 2310.722314814],
    [0.0000000165, 1.40791361998, 2413.8150890326],
    [0.0000000168, 3.14859157339, 508.3503240922],
    [0.00000001554, 2.6262170258, 4694.0029547076],
    [0.00000001659, 5.98175682556, 2538.2485042536],
    [0.00000001503, 3.29703503593, 543.9180590962],
    [0.00000001418, 1.43920962898, 92.0470739547],
    [0.00000001436, 0.48510722899, 3053.7123753466],
    [0.00000001938, 0.24153971565, 2744.4340526908],
    [0.00000001755, 2.89630885415, 305.3461693927],
    [0.0000000158, 4.73483779539, 2751.5475996916],
    [0.00000001355, 3.75157239299, 2957.7331481288],
    [0.00000001367, 4.04709931552, 8624.2126509272],
    [0.00000001295, 0.77013456913, 11.0457002639],
    [0.00000001417, 2.72690826552, 750.1036075334],
    [0.0000000138, 0.48768964541, 3267.0114707846],
    [0.00000001215, 1.03457197578, 3156.8051495652],
    [0.00000001348, 2.4394903442, 2200.5159935946],
    [0.00000001166, 5.09678141647, 5753.3848848968],
    [0.00000001207, 5.33505225932, 3480.3105662226],
    [0.00000001068, 0.23746084959, 9683.5945811164],
    [0.00000001099, 2.89161285325, 824.7421937488],
    [0.00000001059, 4.42656614241, 12566.1516999828],
    [0.0000000105, 0.55684307152, 39.3568759152],
    [0.00000001237, 2.01193439691, 114.1384744825],
    [0.00000001151, 5.60686496328, 2854.6403739102],
    [0.0000000096, 1.18590945263, 2730.2069586892],
    [0.00000001076, 1.12615472426, 2627.1141844706],
    [0.00000001234, 4.36497099527, 295.0512286542],
    [0.00000001223, 6.24902582987, 3060.8259223474],
    [0.00000000855, 3.29264226226, 210.1177017003],
    [0.00000000809, 0.2992947541, 3370.1042450032],
    [0.00000000797, 3.41888577542, 3274.1250177854],
    [0.00000000853, 0.21857392603, 3583.4033404412],
    [0.00000000853, 2.15781484151, 2516.9078632512],
    [0.00000000895, 4.51167077227, 3067.9394693482],
    [0.00000000716, 0.75678432969, 3473.1970192218],
    [0.00000000948, 5.41841058575, 113.3877149571],
    [0.00000000729, 2.62654166683, 1141.1340634054],
    [0.000000007, 2.44813865916, 416.3032501375],
    [0.0000000071, 5.57517163526, 81.7521332162],
    [0.00000000689, 1.20667355476, 415.5524906121],
    [0.00000000891, 0.455905297, 2015.6710861598],
    [0.00000000668, 5.11098367842, 3796.7024358792],
    [0.00000000644, 3.34496632135, 1382.8873468466],
    [0.00000000645, 3.52435535959, 6681.2248533996],
    [0.00000000824, 0.19879658668, 2332.0629558164],
    [0.00000000778, 5.25858098256, 3171.0322435668],
    [0.00000000586, 3.22394481884, 70.8494453042],
    [0.00000000657, 0.61437610003, 121.2520214833],
    [0.00000000666, 0.79608759798, 5216.5803728014],
    [0.00000000664, 0.3120272389, 5230.807466803],
    [0.00000000598, 0.86260909611, 422.6660376129],
    [0.00000000709, 0.51650339297, 230.5645708254],
    [0.00000000553, 2.1182809852, 423.4167971383],
    [0.00000000758, 5.97800494324, 3377.217792004],
    [0.00000000557, 0.97771502459, 3046.5988283458],
    [0.00000000722, 0.71959364211, 1699.2792165032],
    [0.00000000702, 3.72553405625, 203.0041546995],
    [0.00000000595, 2.21906943375, 9146.790069021],
    [0.00000000594, 1.73500884259, 9161.0171630226],
    [0.00000000715, 4.08496022622, 611.4430983108],
    [0.00000000531, 2.11865506523, 209.3669421749],
    [0.00000000625, 0.89663585617, 32.2433289144],
    [0.00000000659, 6.2250547485, 2648.454825473],
    [0.00000000681, 1.02408995856, 2943.5060541272],
    [0.00000000534, 1.88348788907, 2833.2997329078],
    [0.00000000468, 5.63784469417, 20426.571092422],
    [0.00000000519, 6.23755963393, 3899.7952100978],
    [0.00000000462, 0.12726657379, 3686.4961146598],
    [0.00000000478, 2.37999482257, 1457.525933062],
    [0.00000000456, 3.09423162154, 3590.516887442],
    [0.00000000475, 2.16152670047, 195.1398481733],
    [0.0000000042, 0.49178001551, 3789.5888888784],
    [0.00000000417, 2.89386605981, 440.8252848776],
    [0.00000000497, 4.30636916829, 3384.3313390048],
    [0.00000000459, 4.34453384866, 52175.8062831484],
    [0.00000000513, 4.92989514791, 3487.4241132234],
    [0.0000000038, 0.07966199578, 11506.7697697936],
    [0.00000000483, 5.96956052333, 2964.8466951296],
    [0.0000000046, 4.0214898475, 224.3447957019],
    [0.00000000385, 2.8287585556, 6812.766815086],
    [0.00000000367, 4.89408926308, 4113.0943055358],
    [0.00000000461, 2.69075924485, 1066.49547719],
    [0.00000000376, 4.25257098699, 10742.9765113056],
    [0.00000000494, 3.80064503211, 927.8349679674],
    [0.00000000345, 0.92843744112, 731.9443602687],
    [0.00000000345, 2.2097638396, 732.6951197941],
    [0.00000000437, 0.8929345289, 3259.8979237838],
    [0.00000000353, 2.44377546224, 860.3099287528],
    [0.00000000332, 1.74863766701, 202.2533951741],
    [0.00000000463, 5.71115185876, 3693.6096616606],
    [0.00000000368, 3.53134889333, 405.2575498736],
    [0.00000000356, 3.23756611887, 526.5095713569],
    [0.00000000315, 3.23531806558, 1038.0412891868],
    [0.0000000031, 0.66563216133, 739.0579072695],
    [0.00000000324, 0.78288350144, 3362.9906980024],
    [0.000000003, 3.26758841403, 1354.4331588434],
    [0.000000003, 1.2286998465, 408.4389436113],
    [0.00000000332, 5.60412965507, 373.0142209592],
    [0.0000000033, 1.61833439298, 3149.6916025644],
    [0.00000000347, 3.13475101079, 721.6494195302],
    [0.00000000307, 2.14882011739, 1773.9178027186],
    [0.00000000284, 1.95341638199, 739.8086667949],
    [0.00000000312, 5.97852869828, 4216.1870797544],
    [0.00000000274, 4.99597908772, 320.3240229197],
    [0.00000000268, 6.24935281385, 4002.8879843164],
    [0.00000000277, 3.17957028058, 1670.8250285],
    [0.00000000338, 5.71286636771, 3281.2385647862],
    [0.00000000269, 4.48855512398, 67.6680515665],
    [0.00000000271, 4.81325378222, 387.2413149608],
    [0.00000000282, 3.45562997234, 312.4597163935],
    [0.00000000338, 4.45246400605, 337.732510659],
    [0.0000000026, 3.52410017882, 234.6397364404],
    [0.00000000254, 2.77451563175, 3906.9087570986],
    [0.0000000035, 3.51506409473, 1244.226837624],
    [0.00000000268, 1.99012275535, 430.5303441391],
    [0.00000000245, 0.2384338892, 4105.980758535],
    [0.00000000249, 5.45841078297, 5621.8429232104],
    [0.0000000033, 4.61604427215, 3803.81598288],
    [0.00000000313, 4.32676666672, 760.25553592],
    [0.00000000255, 4.65113278957, 313.2104759189],
    [0.0000000028, 0.73789439918, 3576.2897934404],
    [0.00000000238, 3.01231814392, 1987.2168981566],
    [0.00000000222, 4.94085914136, 46.470422916],
    [0.00000000293, 3.47369092645, 519.3960243561],
    [0.00000000216, 3.88949391431, 1596.1864422846],
    [0.00000000222, 3.53225169586, 1912.5783119412],
    [0.00000000273, 4.1227991452, 3700.7232086614],
    [0.00000000211, 1.11370838566, 78263.70942472259],
    [0.00000000279, 5.44791833558, 4010.0015313172],
    [0.000000002, 4.68539844156, 4429.4861751924],
    [0.00000000196, 0.42914135717, 1364.7280995819],
    [0.00000000191, 0.65118028005, 1048.3362299253],
    [0.00000000223, 2.11977319738, 525.7588118315],
    [0.00000000235, 3.11407373482, 298.2326223919],
    [0.00000000185, 1.98775828596, 1049.0869894507],
    [0.00000000224, 5.4629716626, 3597.6304344428],
    [0.00000000247, 3.23240470855, 1560.6187072806],
    [0.00000000203, 1.35826116085, 3466.083472221],
    [0.00000000207, 4.60511893409, 909.8187330546],
    [0.00000000175, 1.15947239718, 827.9235874865],
    [0.00000000193, 2.80770938482, 2303.6087678132],
    [0.00000000211, 4.42227378114, 155.7829722581],
    [0.00000000192, 1.92914050856, 2090.3096723752],
    [0.00000000198, 2.98596793971, 842.9014410135],
    [0.00000000188, 0.60285634039, 3679.382567659],
    [0.00000000177, 0.78948880832, 1751.539531416],
    [0.00000000169, 0.41298943818, 1055.4497769261],
    [0.00000000178, 1.8587798623, 511.5317178299],
    [0.00000000178, 4.22330222775, 319.5732633943],
    [0.00000000167, 6.00939193176, 245.5424243524],
    [0.00000000164, 1.29463335195, 19367.1891622328],
    [0.00000000185, 5.72372399249, 4532.578949411],
    [0.00000000167, 4.73103793255, 306.0969289181],
    [0.00000000178, 0.56170581339, 3892.681663097],
    [0.00000000158, 6.08852868016, 4319.279853973],
    [0.00000000159, 5.27515174011, 398.1440028728],
    [0.00000000154, 1.14102936629, 842.1506814881],
    [0.00000000162, 2.26966412815, 1809.4855377226],
    [0.00000000151, 1.78914683184, 1056.2005364515],
    [0.00000000213, 5.73358651081, 100.6450936638],
    [0.00000000156, 2.046389928, 757.2171545342],
    [0.00000000148, 4.47814526219, 1279.794572628],
    [0.00000000207, 4.31360426428, 4120.2078525366],
    [0.00000000174, 2.31386010156, 4164.311989613],
    [0.00000000142, 6.28160731435, 4422.3726281916],
    [0.00000000146, 1.83276620897, 746.9222137957],
    [0.00000000148, 0.97591220941, 454.9093665273],
    [0.00000000139, 2.45371342761, 4223.3006267552],
    [0.0000000014, 0.97979229952, 724.8308132679],
    [0.00000000137, 1.69115261952, 518.6452648307],
    [0.00000000157, 6.2781438258, 51116.4243529592],
    [0.00000000135, 3.86260570747, 10021.8372800994],
    [0.00000000134, 3.86837429894, 166.828672522],
    [0.00000000149, 2.58173922032, 2620.0006374698],
    [0.00000000138, 2.5137373129, 1493.093668066],
    [0.00000000141, 2.02737965819, 2125.8774073792],
    [0.00000000145, 2.75205037547, 142.4496501338],
    [0.00000000148, 4.22327775923, 629.6023455755],
    [0.00000000151, 3.71800459669, 8094.5216858326],
    [0.00000000173, 2.95490967398, 1877.0105769372],
    [0.00000000166, 3.19015558341, 835.7878940127],
    [0.00000000164, 4.47621356115, 105.5404547734],
    [0.00000000166, 5.18898784396, 4326.3934009738],
    [0.00000000144, 5.2176855365, 3914.0223040994],
    [0.00000000121, 1.88555162282, 1159.2933106701],
    [0.00000000127, 4.33018192988, 636.7158925763],
    [0.00000000149, 3.96551693514, 4017.115078318],
    [0.00000000141, 1.9269997087, 685.4739373527],
    [0.0000000013, 2.32685637101, 2545.3620512544],
    [0.00000000109, 4.48596703902, 4745.878044849],
    [0.00000000152, 2.85627249544, 2228.9701815978],
    [0.0000000011, 2.96373530836, 415.2918581812],
    [0.00000000126, 5.49997961177, 5223.6939198022],
    [0.00000000124, 1.10624182153, 3782.4753418776],
    [0.00000000113, 0.36911927152, 4209.0735327536],
    [0.00000000112, 1.87217982741, 2861.753920911],
    [0.00000000118, 1.73015473112, 2406.7015420318],
    [0.00000000108, 1.80292763213, 2442.2692770358],
    [0.00000000101, 1.76927879823, 1365.4788591073],
    [0.00000000097, 0.14394727643, 355.7487455718],
    [0.00000000097, 4.17340157082, 533.6231183577],
    [0.0000000011, 2.34474707363, 2936.3925071264],
    [0.00000000109, 5.47494804305, 4848.9708190676],
    [0.0000000011, 0.43068721238, 3995.7744373156],
    [0.00000000128, 4.01631210629, 4436.5997221932],
    [0.00000000092, 4.76521510624, 217.2312487011],
    [0.00000000095, 4.97768703394, 714.5358725294],
    [0.00000000091, 0.18215659624, 1371.8416465827],
    [0.00000000094, 5.92405551364, 4635.6717236296],
    [0.00000000092, 1.48525550068, 3178.1457905676],
    [0.00000000124, 0.4153578823, 9153.9036160218],
    [0.00000000093, 5.29959154517, 24498.8302462904],
    [0.00000000083, 2.85719049995, 835.0371344873],
    [0.00000000103, 3.0766824018, 604.4725636619],
    [0.00000000081, 3.28920235025, 2810.9214616052],
    [0.00000000086, 1.29570453009, 1969.2006632438],
    [0.00000000078, 0.63084587176, 4701.1165017084],
    [0.00000000077, 4.16500070887, 104351.61256629678],
    [0.00000000078, 0.44896372095, 4686.8894077068],
    [0.00000000075, 1.43468034992, 25558.2121764796],
    [0.00000000087, 2.48284420609, 69.1525242748],
    [0.00000000084, 5.94227050452, 446.3113468182],
    [0.00000000073, 1.38205209307, 380.12776796],
    [0.00000000081, 3.67935509351, 1432.3961511484],
];

const H2: &[Term] = &[
    [0.00009858539, 0.0, 0.0],
    [0.00001409659, 3.32663555725, 7.1135470008],
    [0.0000016179, 3.19948896566, 14.2270940016],
    [0.0000011475, 4.97852281406, 110.2063212194],
    [0.00000059983, 4.86730351521, 206.1855484372],
    [0.00000061871, 3.96717006336, 95.9792272178],
    [0.00000035607, 4.19809200098, 117.3198682202],
    [0.00000028233, 4.95191245373, 199.0720014364],
    [0.00000030206, 5.87906070739, 309.2783226558],
    [0.00000026362, 3.06984243959, 323.5054166574],
    [0.0000002112, 4.78692719794, 522.5774180938],
    [0.00000019825, 5.58911789448, 426.598190876],
    [0.00000015548, 3.72434067592, 412.3710968744],
    [0.00000017298, 5.33345261528, 103.0927742186],
    [0.00000016523, 0.91679791353, 213.299095438],
    [0.00000011496, 4.69747922848, 515.463871093],
    [0.00000013408, 5.0436866485, 419.4846438752],
    [0.00000013533, 5.56697058298, 625.6701923124],
    [0.00000009986, 5.5510804731, 742.9900605326],
    [0.00000010409, 4.62280533268, 838.9692877504],
    [0.00000009865, 2.14982787839, 220.4126424388],
    [0.00000007614, 3.53754064684, 728.762966531],
    [0.00000007446, 0.63989336841, 316.3918696566],
    [0.00000009622, 4.59354791816, 735.8765135318],
    [0.00000006485, 2.77030223777, 3.1813937377],
    [0.00000008742, 5.9399408248, 302.164775655],
    [0.00000006452, 4.44960470763, 831.8557407496],
    [0.0000000663, 5.07204171934, 942.062061969],
    [0.0000000664, 3.074009998, 21.3406410024],
    [0.00000005548, 5.49260183093, 1059.3819301892],
    [0.00000006878, 0.62978954688, 529.6909650946],
    [0.0000000531, 2.2929944397, 639.897286314],
    [0.00000006445, 4.30423724487, 1052.2683831884],
    [0.00000004898, 1.8780762401, 536.8045120954],
    [0.00000004021, 3.38976267286, 1045.1548361876],
    [0.00000003893, 3.8775991977, 1155.361157407],
    [0.00000003768, 4.61580344208, 1258.4539316256],
    [0.00000003729, 4.14626360039, 1148.2476104062],
    [0.00000004449, 5.65743804762, 618.5566453116],
    [0.00000003997, 3.79890001527, 949.1756089698],
    [0.00000004187, 2.90209008513, 330.6189636582],
    [0.00000004166, 4.03605334253, 1368.660252845],
    [0.00000002965, 5.22875890185, 1375.7737998458],
    [0.00000003684, 0.35323108706, 846.0828347512],
    [0.00000002902, 5.38808092786, 632.7837393132],
    [0.00000002607, 4.26348620145, 1169.5882514086],
    [0.00000003097, 3.53640605964, 1265.5674786264],
    [0.00000002323, 1.93921698604, 227.5261894396],
    [0.00000002264, 4.17484471592, 1574.8458012822],
    [0.00000002214, 3.27816707177, 1361.5467058442],
    [0.0000000221, 3.87756365895, 1464.6394800628],
    [0.00000002165, 4.01765727106, 1485.9801210652],
    [0.00000002688, 5.34204161526, 934.9485149682],
    [0.00000002649, 3.70829898211, 1685.0521225016],
    [0.00000001989, 3.39771738376, 1471.7530270636],
    [0.00000001746, 2.74482946416, 433.7117378768],
    [0.00000002116, 3.2993955704, 1581.959348283],
    [0.00000001535, 4.64373677299, 1692.1656695024],
    [0.00000001514, 2.59046899423, 10.2949407385],
    [0.00000001599, 5.12181429176, 191.9584544356],
    [0.00000001484, 3.75218999508, 1802.3719907218],
    [0.00000001399, 3.76874931025, 1891.2376709388],
    [0.00000001409, 1.49191301858, 853.196381752],
    [0.00000001716, 5.0338208812, 1251.3403846248],
    [0.00000001681, 3.41680070095, 2001.4439921582],
    [0.00000001311, 3.62150293665, 1781.0313497194],
    [0.0000000128, 3.18424195726, 1677.9385755008],
    [0.00000001205, 3.98065595116, 124.433415221],
    [0.00000001175, 0.70600948558, 88.865680217],
    [0.0000000108, 3.01193936713, 1788.1448967202],
    [0.00000001365, 3.07688827561, 1898.3512179396],
    [0.00000000992, 1.18188963905, 956.2891559706],
    [0.00000000932, 3.47952636211, 2118.7638603784],
    [0.00000000949, 0.07635253096, 1272.6810256272],
    [0.00000001108, 4.72677970829, 1567.7322542814],
    [0.0000000087, 3.39941010951, 2207.6295405954],
    [0.00000000855, 4.20972160184, 2008.557539159],
    [0.00000001056, 3.13318829061, 2317.8358618148],
    [0.00000000796, 6.01019859041, 1589.0728952838],
    [0.00000000806, 4.5073054706, 99.9113804809],
    [0.00000000774, 3.379281356, 2097.423219376],
    [0.000000008, 4.86593208031, 508.3503240922],
    [0.00000000776, 3.1004334999, 1994.3304451574],
    [0.00000000858, 2.85497238921, 2214.7430875962],
    [0.00000000611, 1.61848631609, 543.9180590962],
    [0.00000000748, 5.42237069253, 106.2741679563],
    [0.00000000713, 4.4262630356, 1884.124123938],
    [0.00000000588, 5.67599064469, 1905.4647649404],
    [0.00000000568, 1.90596100736, 647.0108333148],
    [0.00000000604, 2.72233959276, 2104.5367663768],
    [0.00000000677, 6.08110313868, 295.0512286542],
    [0.0000000054, 3.06377976717, 2524.021410252],
    [0.00000000553, 3.20986440986, 2435.155730035],
    [0.00000000655, 2.85709685289, 2634.2277314714],
    [0.00000000487, 3.80215707376, 2324.9494088156],
    [0.00000000522, 4.61277002231, 824.7421937488],
    [0.00000000465, 5.79233146332, 99.1606209555],
    [0.00000000442, 1.06859483982, 81.7521332162],
    [0.00000000457, 3.15400088784, 2413.8150890326],
    [0.00000000528, 2.63992253323, 2531.1349572528],
    [0.00000000402, 5.20617966582, 2221.856634597],
    [0.00000000488, 3.002625095, 2310.722314814],
    [0.00000000454, 4.13461219841, 2200.5159935946],
    [0.00000000422, 1.34585191998, 750.1036075334],
    [0.00000000342, 2.52020628136, 2420.9286360334],
    [0.00000000331, 2.75539615467, 2840.4132799086],
    [0.0000000035, 3.77375418785, 107.0249274817],
    [0.00000000391, 5.80224104935, 611.4430983108],
    [0.00000000346, 4.3496268826, 1141.1340634054],
    [0.00000000402, 2.58856946013, 2950.619601128],
    [0.00000000318, 2.95781678725, 2751.5475996916],
    [0.00000000277, 4.83316391587, 2538.2485042536],
    [0.00000000322, 2.42514315746, 2847.5268269094],
    [0.00000000279, 3.41839006285, 2641.3412784722],
    [0.00000000269, 2.94128313284, 2730.2069586892],
    [0.00000000298, 0.20382337796, 1162.4747044078],
    [0.00000000289, 3.61737095505, 113.3877149571],
    [0.00000000287, 3.85414053269, 2516.9078632512],
    [0.00000000235, 1.75802987159, 1382.8873468466],
    [0.00000000313, 2.87586445097, 2627.1141844706],
    [0.00000000269, 5.52295324905, 927.8349679674],
    [0.00000000262, 2.81986116675, 1795.258443721],
    [0.00000000226, 4.09806750264, 1457.525933062],
    [0.00000000199, 2.38503372661, 2737.32050569],
    [0.00000000201, 2.46982299648, 3156.8051495652],
    [0.00000000204, 4.22557285368, 416.3032501375],
    [0.00000000202, 1.68010008198, 1066.49547719],
    [0.00000000239, 3.04281052749, 1478.8665740644],
    [0.0000000019, 1.17596543163, 440.8252848776],
    [0.00000000188, 0.70049803884, 149.5631971346],
    [0.00000000187, 4.47713749552, 2854.6403739102],
    [0.00000000227, 5.51735321426, 203.0041546995],
    [0.00000000243, 2.32802691305, 3267.0114707846],
    [0.00000000197, 5.42954309511, 422.6660376129],
    [0.00000000193, 2.21295191302, 3163.918696566],
    [0.00000000176, 2.70511427281, 3067.9394693482],
    [0.0000000019, 2.61195073798, 2111.6503133776],
    [0.00000000204, 2.72597361452, 2943.5060541272],
    [0.00000000191, 5.28475854814, 2015.6710861598],
    [0.00000000191, 5.24338191209, 1244.226837624],
    [0.00000000185, 2.76959220565, 337.732510659],
    [0.00000000186, 4.97981369862, 2332.0629558164],
    [0.0000000018, 3.57988992595, 2833.2997329078],
    [0.0000000016, 3.06464078177, 2957.7331481288],
    [0.00000000146, 1.77634528395, 234.6397364404],
    [0.00000000153, 4.95508392233, 210.1177017003],
    [0.00000000159, 2.74804287611, 3046.5988283458],
    [0.00000000131, 0.30535647397, 209.3669421749],
    [0.00000000145, 3.86532190587, 1773.9178027186],
    [0.00000000126, 4.92877812202, 1038.0412891868],
    [0.00000000136, 5.71993511821, 1699.2792165032],
    [0.00000000121, 2.28757202499, 3053.7123753466],
    [0.00000000152, 4.69653896793, 2648.454825473],
    [0.00000000123, 4.14793381364, 3171.0322435668],
    [0.00000000122, 4.95141703281, 1354.4331588434],
    [0.00000000127, 0.79855351828, 860.3099287528],
    [0.00000000121, 2.20584423745, 3473.1970192218],
    [0.00000000123, 5.25521753402, 405.2575498736],
    [0.00000000128, 4.8466966555, 721.6494195302],
    [0.00000000115, 5.50279446523, 415.5524906121],
    [0.00000000132, 2.55392072735, 3259.8979237838],
    [0.00000000147, 2.06952289359, 3583.4033404412],
    [0.00000000135, 4.96240124977, 1560.6187072806],
    [0.00000000104, 0.37085721185, 76.2660712756],
];

const H3: &[Term] = &[
    [0.00000513109, PI, 0.0],
    [0.00000131751, 1.55652906839, 7.1135470008],
    [0.00000036795, 1.47927043619, 14.2270940016],
    [0.00000009016, 4.02057976906, 110.2063212194],
    [0.00000008521, 5.69851652298, 95.9792272178],
    [0.00000006505, 2.48293582956, 117.3198682202],
    [0.00000005183, 0.39499716785, 199.0720014364],
    [0.00000002809, 4.20331147447, 426.598190876],
    [0.00000003475, 3.65088578992, 103.0927742186],
    [0.00000002904, 0.47709570418, 206.1855484372],
    [0.00000002926, 1.42948991212, 309.2783226558],
    [0.00000002133, 5.47347867468, 412.3710968744],
    [0.00000002123, 0.15382854359, 515.463871093],
    [0.0000000245, 1.34194456894, 323.5054166574],
    [0.00000002093, 1.45835416808, 21.3406410024],
    [0.00000002006, 1.39117558814, 302.164775655],
    [0.00000001416, 4.02900394355, 742.9900605326],
    [0.00000001679, 5.4461601316, 213.299095438],
    [0.00000001328, 0.46403689791, 220.4126424388],
    [0.00000001087, 5.34794305567, 728.762966531],
    [0.00000001196, 6.2066753463, 831.8557407496],
    [0.00000001341, 1.10764655156, 625.6701923124],
    [0.00000001353, 0.5895608817, 522.5774180938],
    [0.00000001025, 1.12418281742, 618.5566453116],
    [0.00000000946, 1.19673551673, 330.6189636582],
    [0.00000000764, 3.8479454746, 1059.3819301892],
    [0.00000000693, 0.23757256113, 227.5261894396],
    [0.00000000685, 5.89681290661, 1148.2476104062],
    [0.00000000768, 0.46966005281, 838.9692877504],
    [0.00000000659, 0.22920714943, 536.8045120954],
    [0.00000000611, 5.25578305282, 1045.1548361876],
    [0.00000000606, 0.43488865209, 942.062061969],
    [0.00000000509, 0.54813760883, 639.897286314],
    [0.00000000617, 0.80746559334, 934.9485149682],
    [0.00000000559, 5.16946896332, 529.6909650946],
    [0.00000000433, 2.6044184655, 88.865680217],
    [0.00000000486, 0.51391724697, 191.9584544356],
    [0.00000000408, 3.59358502972, 1375.7737998458],
    [0.00000000405, 5.63498631798, 1464.6394800628],
    [0.00000000357, 2.5096129351, 1169.5882514086],
    [0.0000000036, 6.10086542879, 1258.4539316256],
    [0.00000000367, 5.17753097389, 1361.5467058442],
    [0.00000000304, 1.09573898387, 433.7117378768],
    [0.00000000345, 2.35103054408, 124.433415221],
    [0.00000000391, 0.49606623472, 1251.3403846248],
    [0.00000000299, 2.26446319803, 1485.9801210652],
    [0.00000000258, 2.50282928822, 419.4846438752],
    [0.00000000239, 5.56884085572, 1574.8458012822],
    [0.00000000278, 2.67828946348, 316.3918696566],
    [0.00000000229, 4.65510234636, 949.1756089698],
    [0.00000000281, 4.88179135523, 846.0828347512],
    [0.00000000242, 5.38685416737, 1781.0313497194],
    [0.00000000221, 3.25375995221, 1692.1656695024],
    [0.00000000246, 0.26455892573, 508.3503240922],
    [0.00000000233, 1.49566025072, 295.0512286542],
    [0.00000000205, 2.01206237333, 1802.3719907218],
    [0.0000000023, 5.08506969218, 1677.9385755008],
    [0.00000000195, 6.24311392862, 543.9180590962],
    [0.00000000234, 6.04501058838, 1052.2683831884],
    [0.00000000192, 2.87664300823, 81.7521332162],
    [0.00000000251, 0.18107941205, 1567.7322542814],
    [0.00000000181, 4.5733651097, 1265.5674786264],
    [0.00000000215, 0.01705875421, 735.8765135318],
    [0.00000000185, 0.03626184686, 853.196381752],
    [0.00000000192, 5.81887394994, 1368.660252845],
    [0.00000000162, 5.13233986946, 1891.2376709388],
    [0.00000000174, 5.8138025435, 956.2891559706],
    [0.00000000152, 5.364456195, 1155.361157407],
    [0.00000000162, 0.01641198621, 824.7421937488],
];

const H4: &[Term] = &[
    [0.00000010211, 5.98104481075, 7.1135470008],
    [0.00000009007, PI, 0.0],
    [0.00000006231, 6.04815787394, 14.2270940016],
    [0.00000000973, 2.75915002497, 110.2063212194],
    [0.00000000896, 1.13133470096, 95.9792272178],
    [0.00000000898, 0.69612987694, 117.3198682202],
    [0.00000000718, 2.17160970004, 199.0720014364],
    [0.00000000362, 3.12744762656, 302.164775655],
    [0.00000000305, 2.63432675276, 426.598190876],
    [0.00000000269, 3.3864313978, 309.2783226558],
    [0.00000000305, 2.02245392075, 515.463871093],
    [0.00000000261, 5.44819828527, 103.0927742186],
    [0.00000000226, 0.90680356094, 412.3710968744],
];

const Q0: &[Term] = &[
    [0.00206561098, PI, 0.0],
    [0.00000856543, 2.10259354702, 7.1135470008],
    [0.00000220629, 3.05589086672, 110.2063212194],
    [0.00000117121, 3.26532246993, 103.0927742186],
    [0.00000138248, 1.31389381161, 316.3918696566],
    [0.00000089203, 2.72189945153, 426.598190876],
    [0.00000068942, 6.01638802084, 206.1855484372],
    [0.00000070953, 1.29680099461, 632.7837393132],
    [0.00000052317, 5.92027175027, 213.299095438],
    [0.0000003828, 2.45098071695, 742.9900605326],
    [0.00000036397, 2.14026743067, 1059.3819301892],
    [0.00000031208, 2.7461235605, 419.4846438752],
    [0.00000029448, 1.03667416787, 949.1756089698],
    [0.00000023907, 1.84338632662, 323.5054166574],
    [0.00000018275, 1.86370759639, 1375.7737998458],
    [0.00000020274, 5.09508015973, 529.6909650946],
    [0.00000014585, 2.39596399885, 735.8765135318],
    [0.0000001502, 0.79921282551, 309.2783226558],
    [0.00000015455, 5.64545639488, 522.5774180938],
    [0.0000001554, 1.93407422498, 14.2270940016],
    [0.00000013383, 1.55505564463, 639.897286314],
    [0.00000013006, 0.77038144062, 1265.5674786264],
    [0.00000013808, 2.15379576425, 95.9792272178],
    [0.00000010006, 4.27010868537, 846.0828347512],
    [0.00000009122, 1.59665953146, 1692.1656695024],
    [0.00000007723, 2.0815829504, 1052.2683831884],
    [0.00000006817, 1.4728383904, 9683.5945811164],
    [0.00000006145, 2.67152261626, 10742.9765113056],
    [0.00000006244, 3.50995508721, 1162.4747044078],
    [0.000000072, 0.80881143803, 220.4126424388],
    [0.00000005917, 0.5075264427, 1581.959348283],
    [0.00000005756, 1.13167286734, 956.2891559706],
    [0.00000005526, 0.65524185256, 625.6701923124],
    [0.00000005336, 5.2304358071, 838.9692877504],
    [0.00000004555, 1.33699565679, 2008.557539159],
    [0.00000004282, 1.78717760842, 1368.660252845],
    [0.00000004269, 2.54208887073, 5753.3848848968],
    [0.00000003529, 1.08657486369, 1272.6810256272],
    [0.00000004107, 3.0190961509, 1478.8665740644],
    [0.00000003607, 3.74104833347, 6812.766815086],
    [0.00000002953, 2.80615416783, 117.3198682202],
    [0.00000002817, 2.00108813699, 412.3710968744],
    [0.00000003349, 0.58782820411, 536.8045120954],
    [0.00000002709, 0.24996926212, 1898.3512179396],
    [0.00000002384, 1.50283068117, 1685.0521225016],
    [0.00000002276, 1.08554028614, 2324.9494088156],
    [0.00000002537, 0.43373217445, 942.062061969],
    [0.00000002098, 0.32336004708, 3.9321532631],
    [0.00000002607, 2.62604474972, 1795.258443721],
    [0.00000001675, 2.42495975557, 149.5631971346],
    [0.00000001662, 3.12969067817, 25558.2121764796],
    [0.00000001596, 4.32845217372, 26617.5941066688],
    [0.00000002158, 0.32922021141, 853.196381752],
    [0.0000000211, 4.74781182444, 1155.361157407],
    [0.00000001503, 1.34509600845, 1589.0728952838],
    [0.0000000136, 6.221551798, 199.0720014364],
    [0.00000001321, 1.22593137021, 2001.4439921582],
    [0.000000016, 2.28167049256, 2111.6503133776],
    [0.00000001308, 1.8030536623, 728.762966531],
    [0.00000001234, 0.00039829737, 2214.7430875962],
    [0.00000001137, 0.84270797151, 2641.3412784722],
    [0.00000001247, 0.19061457469, 1258.4539316256],
    [0.00000001149, 6.21140510775, 1169.5882514086],
    [0.0000000122, 4.38391434882, 76.2660712756],
    [0.00000000915, 5.2136540603, 10213.285546211],
    [0.00000000932, 4.1848966089, 1471.7530270636],
    [0.00000000957, 1.96516402907, 2428.0421830342],
    [0.00000000727, 0.95484626607, 2317.8358618148],
    [0.0000000079, 2.20793073151, 88.865680217],
    [0.00000000717, 1.58501804866, 1045.1548361876],
    [0.00000000665, 2.39112317031, 433.7117378768],
    [0.00000000788, 1.56504678855, 1905.4647649404],
    [0.00000000634, 0.91781848215, 302.164775655],
    [0.0000000074, 0.68835355847, 74.7815985673],
    [0.00000000635, 1.63856405919, 330.6189636582],
    [0.00000000568, 0.60969149534, 2957.7331481288],
    [0.00000000626, 6.21501570547, 1574.8458012822],
    [0.00000000554, 6.04530522087, 2531.1349572528],
    [0.00000000498, 1.67719036317, 2221.856634597],
    [0.00000000472, 3.57699368713, 1788.1448967202],
    [0.00000000647, 6.10104374004, 1485.9801210652],
    [0.00000000557, 6.2830442691, 6283.0758499914],
    [0.00000000561, 1.6661928649, 2744.4340526908],
    [0.00000000404, 5.28378800661, 1066.49547719],
    [0.00000000415, 1.3531127399, 1361.5467058442],
    [0.00000000396, 0.6899091411, 2634.2277314714],
    [0.00000000376, 4.92655082133, 1382.8873468466],
    [0.00000000345, 5.7609469394, 515.463871093],
    [0.00000000432, 5.5168226613, 2810.9214616052],
    [0.00000000328, 1.64274838709, 2538.2485042536],
    [0.00000000335, 6.17867358476, 51646.11531805379],
    [0.00000000328, 1.09424760198, 52705.49724824299],
    [0.00000000302, 2.10393822091, 305.3461693927],
    [0.00000000272, 2.99928424673, 2104.5367663768],
    [0.00000000283, 0.38719732188, 3274.1250177854],
    [0.00000000311, 0.68121479856, 227.5261894396],
    [0.00000000313, 5.94208681458, 1891.2376709388],
    [0.00000000273, 1.80638116637, 909.8187330546],
    [0.00000000266, 4.69425621932, 1699.2792165032],
    [0.00000000323, 1.38097224949, 3060.8259223474],
    [0.00000000311, 5.94940336045, 1802.3719907218],
    [0.00000000312, 0.43102167974, 3870.3033917944],
    [0.00000000319, 6.15953428298, 454.9093665273],
    [0.00000000243, 1.11174207231, 1677.9385755008],
    [0.00000000232, 4.80879978721, 224.3447957019],
    [0.00000000243, 5.82462168905, 2847.5268269094],
    [0.0000000023, 0.58734403713, 26087.9031415742],
    [0.00000000255, 0.6781824128, 618.5566453116],
    [0.00000000247, 1.33262082071, 647.0108333148],
    [0.00000000214, 0.43010046162, 2950.619601128],
    [0.00000000211, 1.51953375528, 2854.6403739102],
    [0.000000002, 5.85262154922, 750.1036075334],
    [0.00000000173, 1.12411605007, 9153.9036160218],
    [0.00000000168, 3.83409980557, 604.4725636619],
    [0.00000000167, 4.43740107441, 2015.6710861598],
    [0.00000000171, 4.25249649975, 380.12776796],
    [0.00000000169, 2.49875053036, 2420.9286360334],
    [0.00000000184, 1.10512636569, 3377.217792004],
    [0.00000000162, 1.96671720111, 405.2575498736],
    [0.00000000143, 0.86648149776, 1994.3304451574],
    [0.00000000154, 5.65351851041, 2207.6295405954],
    [0.00000000141, 0.17566426415, 3590.516887442],
    [0.00000000131, 1.34943237497, 3171.0322435668],
    [0.00000000141, 3.02083589906, 11272.6674764002],
    [0.0000000012, 4.85169589791, 99.1606209555],
    [0.00000000114, 0.17617103966, 3267.0114707846],
    [0.00000000127, 0.4100039491, 934.9485149682],
    [0.00000000113, 6.00378674586, 230.5645708254],
    [0.00000000144, 5.61321414021, 2118.7638603784],
    [0.00000000124, 5.17861431326, 831.8557407496],
    [0.00000000102, 4.17461081519, 2332.0629558164],
    [0.00000000103, 5.63391065189, 3163.918696566],
    [0.00000000114, 0.40526960297, 543.9180590962],
    [0.00000000106, 2.06973857678, 2737.32050569],
    [0.00000000111, 2.19493975471, 5223.6939198022],
    [0.00000000103, 0.8396043018, 3693.6096616606],
    [0.00000000083, 0.61208037894, 2310.722314814],
    [0.00000000079, 1.15329311535, 3487.4241132234],
    [0.00000000079, 4.08884186199, 7342.4577801806],
    [0.00000000079, 1.73775741717, 721.6494195302],
    [0.00000000074, 5.71142781045, 835.0371344873],
];

const Q1: &[Term] = &[
    [0.00031340156, PI, 0.0],
    [0.00000034269, 4.48449666464, 110.2063212194],
    [0.00000021893, 3.19222803886, 103.0927742186],
    [0.00000013029, 4.22454647173, 426.598190876],
    [0.00000012216, 4.72704697483, 206.1855484372],
    [0.00000015434, 1.19461287117, 316.3918696566],
    [0.00000010998, 5.88163694025, 213.299095438],
    [0.00000008677, 0.52447421329, 632.7837393132],
    [0.00000009259, 4.60662739422, 7.1135470008],
    [0.00000005572, 3.95948820019, 742.9900605326],
    [0.00000006012, 0.25501189045, 14.2270940016],
    [0.00000004999, 3.70084251021, 1059.3819301892],
    [0.00000004911, 5.61596396719, 529.6909650946],
    [0.00000003893, 0.21232859294, 949.1756089698],
    [0.00000003107, 4.51986342472, 522.5774180938],
    [0.00000003347, 2.92230445089, 419.4846438752],
    [0.00000002514, 3.43777603496, 1375.7737998458],
    [0.00000002504, 4.1234553017, 95.9792272178],
    [0.00000002666, 5.26585400094, 846.0828347512],
    [0.00000001906, 6.19288589641, 1265.5674786264],
    [0.00000001469, 5.02740419236, 1162.4747044078],
    [0.00000001271, 3.17358438917, 1692.1656695024],
    [0.00000001263, 4.34805510818, 838.9692877504],
    [0.0000000126, 2.79423439027, 735.8765135318],
    [0.00000001107, 5.17052640565, 220.4126424388],
    [0.00000000965, 5.89373449074, 1581.959348283],
    [0.00000000829, 4.75678026647, 1478.8665740644],
    [0.00000000668, 1.19764160139, 117.3198682202],
    [0.00000000647, 2.91173168352, 2008.557539159],
    [0.00000000635, 3.98465877625, 412.3710968744],
    [0.00000000616, 3.31877038934, 639.897286314],
    [0.00000000623, 4.19260134379, 1155.361157407],
    [0.00000000513, 3.65247393967, 323.5054166574],
    [0.00000000505, 5.58962343397, 1898.3512179396],
    [0.00000000589, 2.67530137934, 9683.5945811164],
    [0.00000000598, 2.76139333656, 1052.2683831884],
    [0.00000000459, 4.99492226982, 536.8045120954],
    [0.00000000531, 3.87388187277, 10742.9765113056],
    [0.00000000469, 4.4878699239, 1795.258443721],
    [0.00000000425, 3.92676285337, 88.865680217],
    [0.00000000408, 3.1032909353, 309.2783226558],
    [0.00000000358, 3.01456742937, 625.6701923124],
    [0.00000000373, 2.67814418005, 956.2891559706],
    [0.00000000332, 3.76397194723, 728.762966531],
    [0.00000000331, 2.64995142964, 2324.9494088156],
    [0.0000000034, 4.03090109708, 1471.7530270636],
    [0.00000000333, 4.68770997013, 5753.3848848968],
    [0.00000000327, 2.73841119565, 1368.660252845],
    [0.00000000282, 1.34205655496, 199.0720014364],
    [0.0000000027, 5.28473631514, 2214.7430875962],
    [0.00000000295, 4.73853062898, 853.196381752],
    [0.00000000281, 5.88715233447, 6812.766815086],
    [0.00000000244, 2.87219866146, 1272.6810256272],
    [0.00000000264, 4.2193568837, 2111.6503133776],
    [0.00000000248, 2.59184604626, 302.164775655],
    [0.00000000198, 3.53075398719, 1045.1548361876],
    [0.00000000243, 6.20613937574, 330.6189636582],
    [0.00000000196, 2.70214942161, 942.062061969],
    [0.00000000197, 3.84859196256, 1788.1448967202],
    [0.00000000187, 2.63664985446, 1685.0521225016],
    [0.00000000177, 2.84906867134, 1589.0728952838],
    [0.0000000017, 2.39146298592, 2641.3412784722],
    [0.00000000168, 0.73749448685, 433.7117378768],
    [0.00000000162, 5.2319987195, 227.5261894396],
    [0.00000000148, 4.97527199871, 2531.1349572528],
    [0.00000000153, 4.40152710092, 1169.5882514086],
    [0.00000000148, 3.95675181648, 2428.0421830342],
    [0.0000000012, 3.2832511374, 1361.5467058442],
    [0.00000000107, 3.48287162321, 1066.49547719],
    [0.00000000112, 2.659344635, 1905.4647649404],
    [0.00000000106, 2.48093154701, 2001.4439921582],
    [0.00000000118, 3.64712578297, 2104.5367663768],
    [0.00000000097, 3.13769659643, 1382.8873468466],
    [0.00000000098, 2.39482421656, 1258.4539316256],
    [0.00000000095, 4.10326207414, 1485.9801210652],
];

const Q2: &[Term] = &[
    [0.00001667392, PI, 0.0],
    [0.000000024, 1.7379971856, 7.1135470008],
    [0.00000001062, 5.93949929568, 110.2063212194],
    [0.00000001155, 4.95561094804, 103.0927742186],
    [0.00000001152, 4.86557095465, 14.2270940016],
    [0.00000000936, 4.37688555395, 316.3918696566],
    [0.00000000545, 5.76904581542, 426.598190876],
    [0.00000000442, 4.45200462326, 632.7837393132],
    [0.00000000382, 5.95847646169, 95.9792272178],
    [0.00000000424, 3.91473763784, 213.299095438],
    [0.00000000325, 4.5197410166, 419.4846438752],
    [0.00000000268, 5.33996389386, 1059.3819301892],
    [0.00000000231, 5.60759779378, 742.9900605326],
    [0.00000000218, 3.10624271615, 206.1855484372],
    [0.00000000239, 0.5413909318, 846.0828347512],
    [0.00000000171, 1.25624699967, 529.6909650946],
    [0.00000000207, 0.14827958732, 1162.4747044078],
    [0.00000000178, 1.27481981569, 639.897286314],
    [0.0000000015, 4.20150871066, 949.1756089698],
    [0.00000000167, 1.44524811665, 323.5054166574],
    [0.00000000133, 5.16348389506, 1375.7737998458],
    [0.00000000162, 4.49546651386, 735.8765135318],
    [0.00000000111, 3.24236633008, 220.4126424388],
    [0.00000000144, 6.13724793577, 1478.8665740644],
];

const Q3: &[Term] = &[
    [0.00000076926, 0.0, 0.0],
    [0.00000000201, 1.06565930867, 110.2063212194],
    [0.00000000181, 6.11336620175, 103.0927742186],
];

const P0: &[Term] = &[
    [0.01118377157, 0.0, 0.0],
    [0.00000851237, 0.43284391102, 7.1135470008],
    [0.00000218691, 1.34049397687, 110.2063212194],
    [0.00000089312, 1.09628749839, 426.598190876],
    [0.00000102084, 1.20653209518, 316.3918696566],
    [0.0000007225, 1.58340368528, 206.1855484372],
    [0.00000070009, 2.96939417125, 103.0927742186],
    [0.00000057997, 0.50246104868, 632.7837393132],
    [0.00000038355, 0.830998974, 742.9900605326],
    [0.00000036561, 0.54865949748, 1059.3819301892],
    [0.00000024361, 0.20345735268, 949.1756089698],
    [0.0000002393, 0.15168276394, 323.5054166574],
    [0.00000018404, 0.27352707539, 1375.7737998458],
    [0.00000019096, 2.08249709102, 419.4846438752],
    [0.00000017046, 1.38872537315, 522.5774180938],
    [0.00000016167, 5.84818434409, 213.299095438],
    [0.00000014539, 2.39420313294, 309.2783226558],
    [0.0000001548, 0.25360054958, 14.2270940016],
    [0.00000013497, 6.17358356614, 639.897286314],
    [0.00000014296, 3.58515514822, 95.9792272178],
    [0.00000010815, 6.20857463132, 1265.5674786264],
    [0.00000009201, 0.00568746451, 1692.1656695024],
    [0.00000009986, 1.68484201826, 735.8765135318],
    [0.0000000674, 2.44347757443, 846.0828347512],
    [0.00000006813, 3.0431421057, 9683.5945811164],
    [0.00000006332, 1.22716112551, 838.9692877504],
    [0.00000006141, 1.10105498986, 10742.9765113056],
    [0.00000007153, 5.529267933, 220.4126424388],
    [0.00000006559, 3.60345336502, 529.6909650946],
    [0.00000005974, 5.73386379599, 956.2891559706],
    [0.0000000494, 5.94618115602, 1581.959348283],
    [0.00000004877, 1.97520567349, 625.6701923124],
    [0.0000000564, 1.80257766168, 1162.4747044078],
    [0.00000005649, 1.33946947848, 1052.2683831884],
    [0.00000004599, 6.02662049764, 2008.557539159],
    [0.00000004271, 4.11292819494, 5753.3848848968],
    [0.00000003584, 5.69637443564, 1272.6810256272],
    [0.00000004, 1.42163791365, 1478.8665740644],
    [0.00000003605, 2.17058472392, 6812.766815086],
    [0.000000029, 1.05058170727, 117.3198682202],
    [0.00000002814, 1.09208341402, 1155.361157407],
    [0.00000003273, 1.01248344391, 1368.660252845],
    [0.00000003303, 5.26231321608, 536.8045120954],
    [0.00000002297, 5.77104865821, 2324.9494088156],
    [0.00000002272, 5.70339069318, 1898.3512179396],
    [0.00000002772, 3.07262750165, 3.9321532631],
    [0.00000002158, 1.63990334705, 942.062061969],
    [0.00000002606, 3.17869100963, 412.3710968744],
    [0.00000002602, 1.09124400732, 1795.258443721],
    [0.00000001661, 4.70014628405, 25558.2121764796],
    [0.00000001615, 0.8659501354, 149.5631971346],
    [0.00000002121, 5.00715384988, 853.196381752],
    [0.00000001595, 2.75798580354, 26617.5941066688],
    [0.00000001518, 1.91031227888, 199.0720014364],
    [0.00000001879, 0.70780036159, 1685.0521225016],
    [0.00000001438, 5.92801441921, 1589.0728952838],
    [0.00000001399, 0.96926608603, 1471.7530270636],
    [0.00000001613, 0.78438963064, 2111.6503133776],
    [0.00000001146, 5.52295204614, 2641.3412784722],
    [0.00000001046, 1.33787001713, 1258.4539316256],
    [0.00000001043, 5.48368739103, 2214.7430875962],
    [0.0000000114, 2.79336304084, 728.762966531],
    [0.00000001138, 4.61074339273, 1169.5882514086],
    [0.00000001213, 2.8103125027, 76.2660712756],
    [0.00000001066, 0.41911616596, 2001.4439921582],
    [0.00000000968, 0.491469334, 2428.0421830342],
    [0.00000000783, 3.78503067942, 88.865680217],
    [0.00000000649, 0.78058541316, 433.7117378768],
    [0.00000000752, 0.83727284824, 1788.1448967202],
    [0.00000000571, 5.28316392968, 2957.7331481288],
    [0.0000000071, 6.17556130328, 1905.4647649404],
    [0.00000000628, 0.00376772597, 330.6189636582],
    [0.00000000529, 1.06826854068, 1574.8458012822],
    [0.00000000634, 2.61814137212, 302.164775655],
    [0.00000000595, 2.41828364945, 1045.1548361876],
    [0.00000000642, 4.51414002567, 1485.9801210652],
    [0.00000000598, 0.14241880745, 2317.8358618148],
    [0.00000000476, 5.29332720749, 2531.1349572528],
    [0.00000000568, 0.20840578451, 2744.4340526908],
    [0.00000000493, 0.55865275542, 74.7815985673],
    [0.00000000445, 0.05768260172, 2221.856634597],
    [0.00000000453, 1.7948986535, 515.463871093],
    [0.00000000406, 3.68037863713, 1066.49547719],
    [0.00000000379, 3.33229051142, 1382.8873468466],
    [0.00000000428, 0.80214444487, 2810.9214616052],
    [0.00000000424, 0.68552872774, 2104.5367663768],
    [0.00000000335, 1.46596514236, 51646.11531805379],
    [0.00000000328, 5.8069657203, 52705.49724824299],
    [0.00000000333, 2.06067068283, 1361.5467058442],
    [0.00000000297, 0.05310570315, 2538.2485042536],
    [0.00000000283, 5.05225217039, 3274.1250177854],
    [0.00000000274, 0.83123562527, 1891.2376709388],
    [0.00000000308, 5.35679779746, 227.5261894396],
    [0.00000000268, 3.10257946791, 1699.2792165032],
    [0.00000000263, 0.4442007142, 909.8187330546],
    [0.00000000331, 6.15890256781, 2634.2277314714],
    [0.00000000311, 4.37911633679, 1802.3719907218],
    [0.00000000245, 3.63869514471, 305.3461693927],
    [0.00000000328, 6.21528553061, 3060.8259223474],
    [0.00000000312, 5.14378571242, 3870.3033917944],
    [0.00000000227, 3.23871662463, 224.3447957019],
    [0.00000000234, 5.21342017718, 10213.285546211],
    [0.00000000249, 2.31913322014, 618.5566453116],
    [0.00000000245, 6.02359344207, 647.0108333148],
    [0.00000000256, 5.97665299775, 454.9093665273],
    [0.00000000194, 6.22457317147, 2854.6403739102],
    [0.00000000198, 4.21072212757, 750.1036075334],
    [0.00000000216, 5.14415243571, 2847.5268269094],
    [0.00000000192, 1.7203184239, 1677.9385755008],
    [0.00000000246, 0.50849859583, 2420.9286360334],
    [0.00000000173, 2.69364399987, 9153.9036160218],
    [0.00000000169, 2.84354429471, 2015.6710861598],
    [0.00000000164, 2.27037368724, 604.4725636619],
    [0.00000000207, 1.72283842487, 831.8557407496],
    [0.00000000145, 0.62480803322, 2207.6295405954],
    [0.00000000182, 5.90298985757, 2950.619601128],
    [0.00000000187, 5.94623862581, 3377.217792004],
    [0.00000000158, 3.47818652198, 405.2575498736],
    [0.0000000014, 4.8307990949, 3590.516887442],
    [0.00000000122, 6.05591169105, 3171.0322435668],
    [0.00000000141, 1.45027382664, 11272.6674764002],
    [0.00000000142, 6.28219245753, 6283.0758499914],
    [0.00000000147, 4.06537587531, 2118.7638603784],
    [0.00000000145, 0.31392844034, 2737.32050569],
    [0.00000000112, 1.40343981748, 1994.3304451574],
    [0.00000000122, 3.53351655861, 380.12776796],
    [0.00000000125, 2.05301050004, 934.9485149682],
    [0.00000000103, 2.57986382822, 2332.0629558164],
    [0.00000000102, 1.28977864041, 230.5645708254],
    [0.00000000113, 5.0821395426, 543.9180590962],
    [0.00000000112, 1.67999161477, 1148.2476104062],
    [0.00000000112, 3.76719541687, 5223.6939198022],
    [0.00000000099, 5.65717348131, 3267.0114707846],
    [0.00000000105, 5.68223251431, 3693.6096616606],
    [0.00000000078, 0.44938086019, 2524.021410252],
    [0.00000000079, 2.51829473942, 7342.4577801806],
    [0.00000000098, 5.04950545089, 3163.918696566],
    [0.00000000074, 5.85868634319, 3487.4241132234],
    [0.00000000098, 4.67584865893, 983.1158589136],
];

const P1: &[Term] = &[
    [0.00023427562, PI, 0.0],
    [0.0000003368, 3.00741737744, 110.2063212194],
    [0.00000029342, 3.34828184519, 7.1135470008],
    [0.0000001884, 4.517728748, 316.3918696566],
    [0.00000012857, 2.70397305031, 426.598190876],
    [0.00000016221, 5.09224763999, 103.0927742186],
    [0.00000011751, 6.08985383141, 206.1855484372],
    [0.0000001008, 4.49928654462, 632.7837393132],
    [0.00000010294, 4.09328531773, 213.299095438],
    [0.00000005518, 2.42908584901, 742.9900605326],
    [0.00000004975, 2.1496143339, 1059.3819301892],
    [0.00000006163, 4.74143072651, 14.2270940016],
    [0.00000004475, 4.25989296203, 949.1756089698],
    [0.00000004367, 3.88037097152, 529.6909650946],
    [0.00000002965, 5.74911476654, 522.5774180938],
    [0.00000002505, 1.8868696966, 1375.7737998458],
    [0.0000000338, 4.86130043521, 419.4846438752],
    [0.00000002469, 5.38466140595, 95.9792272178],
    [0.00000002174, 4.01621486199, 1265.5674786264],
    [0.00000002544, 3.5607688966, 846.0828347512],
    [0.00000001266, 1.62535316294, 1692.1656695024],
    [0.00000001447, 3.34069489403, 1162.4747044078],
    [0.00000001177, 5.36708425313, 838.9692877504],
    [0.00000001098, 3.76381982116, 1581.959348283],
    [0.00000001076, 3.62309794141, 220.4126424388],
    [0.00000001321, 4.52125306643, 735.8765135318],
    [0.00000001023, 2.77909026321, 323.5054166574],
    [0.00000000772, 2.17877925389, 639.897286314],
    [0.00000000837, 3.0832649305, 1478.8665740644],
    [0.0000000071, 5.52020490831, 117.3198682202],
    [0.00000000644, 1.36848107413, 2008.557539159],
    [0.00000000574, 3.50707836006, 1898.3512179396],
    [0.000000006, 4.07939551933, 1052.2683831884],
    [0.00000000588, 4.24565732787, 9683.5945811164],
    [0.00000000545, 4.9338459163, 1155.361157407],
    [0.00000000451, 3.32214730414, 536.8045120954],
    [0.00000000531, 2.30367195618, 10742.9765113056],
    [0.00000000426, 5.55847406404, 88.865680217],
    [0.00000000481, 2.82567029965, 1795.258443721],
    [0.00000000391, 1.57223224442, 956.2891559706],
    [0.00000000388, 4.99884035192, 309.2783226558],
    [0.00000000493, 4.81178404731, 412.3710968744],
    [0.0000000033, 1.11420136003, 2324.9494088156],
    [0.00000000332, 6.25933716691, 5753.3848848968],
    [0.00000000307, 3.24595143822, 2214.7430875962],
    [0.00000000372, 3.86695942577, 199.0720014364],
    [0.000000003, 3.5859752266, 1368.660252845],
    [0.00000000287, 1.62064540055, 1272.6810256272],
    [0.00000000286, 3.08326262364, 853.196381752],
    [0.00000000281, 4.31643371275, 6812.766815086],
    [0.00000000275, 2.56696445153, 2111.6503133776],
    [0.00000000241, 4.34534909259, 728.762966531],
    [0.00000000279, 4.46941482854, 1471.7530270636],
    [0.00000000257, 4.41323194508, 302.164775655],
    [0.00000000206, 1.49647236246, 1589.0728952838],
    [0.00000000248, 4.49050261854, 330.6189636582],
    [0.0000000017, 0.8621728248, 2641.3412784722],
    [0.00000000168, 2.98609074853, 2531.1349572528],
    [0.00000000161, 3.14455992637, 1685.0521225016],
    [0.00000000161, 3.58944824016, 227.5261894396],
    [0.00000000163, 5.35013117563, 433.7117378768],
    [0.0000000015, 2.74829578847, 1169.5882514086],
    [0.00000000141, 3.12496309917, 625.6701923124],
    [0.00000000156, 2.31035257479, 2428.0421830342],
    [0.0000000014, 3.91479439362, 1045.1548361876],
    [0.00000000155, 4.00345840662, 1788.1448967202],
    [0.00000000129, 1.2660622444, 1905.4647649404],
    [0.00000000107, 1.848564599, 1066.49547719],
    [0.00000000124, 3.8915002096, 515.463871093],
    [0.00000000098, 1.51796618106, 1382.8873468466],
    [0.00000000094, 2.73793743601, 942.062061969],
    [0.00000000094, 2.50862154178, 1485.9801210652],
    [0.00000000093, 2.72228059144, 2847.5268269094],
    [0.00000000089, 2.76057202743, 2001.4439921582],
];

const P2: &[Term] = &[
    [0.0000208676, 0.0, 0.0],
    [0.00000003739, 1.13964326904, 7.1135470008],
    [0.0000000241, 1.0419854518, 103.0927742186],
    [0.00000001184, 4.17986917378, 110.2063212194],
    [0.00000001184, 2.95998816023, 14.2270940016],
    [0.00000000973, 1.67428730428, 213.299095438],
    [0.0000000057, 4.10452145373, 426.598190876],
    [0.00000000556, 0.69896792401, 419.4846438752],
    [0.00000000556, 4.49784192744, 316.3918696566],
    [0.00000000327, 3.76620384887, 632.7837393132],
    [0.00000000316, 0.83592053769, 95.9792272178],
    [0.00000000274, 3.7165235945, 1059.3819301892],
    [0.00000000245, 3.94271990272, 742.9900605326],
    [0.00000000292, 5.39602687303, 206.1855484372],
    [0.00000000238, 5.62534767187, 846.0828347512],
    [0.00000000291, 0.46696608255, 529.6909650946],
    [0.00000000224, 0.2345376672, 735.8765135318],
    [0.00000000183, 0.43664483391, 323.5054166574],
    [0.00000000197, 5.06983957747, 1162.4747044078],
    [0.00000000181, 6.23195237351, 639.897286314],
    [0.00000000136, 3.52544498929, 1375.7737998458],
    [0.00000000138, 4.71450309081, 1478.8665740644],
    [0.00000000112, 1.64463502652, 220.4126424388],
    [0.00000000113, 5.98350020165, 956.2891559706],
];

pub static JUPITER: EllipticTable = EllipticTable {
    series: [
        &[A0, A1, A2, A3, A4, A5],
        &[L0, L1, L2, L3, L4, L5],
        &[K0, K1, K2, K3, K4],
        &[H0, H1, H2, H3, H4],
        &[Q0, Q1, Q2, Q3],
        &[P0, P1, P2],
    ],
};
